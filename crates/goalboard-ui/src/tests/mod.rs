//! Behavioral tests for the front end
//!
//! BDD-style tests using given-when-then naming. They exercise the pure
//! pieces the components are built from; nothing here touches the DOM.

pub mod board_behaviors;
pub mod notice_behaviors;
