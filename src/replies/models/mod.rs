pub mod reply_payload;
