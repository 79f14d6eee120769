pub mod values_response;
