//! Goalboard core: goal records, the persisted goal store, and the list
//! presenter the browser front end renders.
//!
//! ## Module Structure
//! - `goal`: the `Goal` record, ids, and input validation
//! - `storage`: the key-value persistence seam and an in-memory backend
//! - `clock`: time source for ids and creation stamps
//! - `store`: `GoalStore`, CRUD over the newest-first list
//! - `board`: `GoalBoard`, the visible list and user gestures
//! - `notice`: transient banner messages and their timing
//! - `config`: `BoardConfig`
//! - `error` / `result`: error type and Result alias

#![forbid(unsafe_code)]

pub mod board;
pub mod clock;
pub mod config;
pub mod error;
pub mod goal;
pub mod notice;
pub mod result;
pub mod storage;
pub mod store;

pub use board::{GoalBoard, is_submit_key};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::BoardConfig;
pub use error::Error;
pub use goal::{Goal, GoalDraft, GoalField, GoalId};
pub use notice::{Notice, NoticeKind, NoticeTiming};
pub use result::{Result, ResultExt};
pub use storage::{KeyValueStore, MemoryStorage};
pub use store::GoalStore;
