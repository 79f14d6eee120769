pub mod directory_record;
