pub mod google_sheets;
