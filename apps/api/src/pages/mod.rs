// Page documents for the four site routes plus the not-found fallback.

pub mod content;
pub mod handlers;
