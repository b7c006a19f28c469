//! Voicetools Test Utils
//!
//! Provides shared testing utilities for the voicetools bot. The bot converts
//! serenity API objects into its own domain models at the data layer boundary;
//! the factories here build those serenity objects the same way serenity does,
//! by deserializing the JSON Discord's API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_role};
//!
//! #[test]
//! fn converts_message() {
//!     let message = create_test_message(1, 2, 3, "hello", None);
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
