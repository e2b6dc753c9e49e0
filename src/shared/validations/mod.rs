pub mod safe_content;

pub use safe_content::validate_safe_content;
