mod common;
mod email_scoring;
