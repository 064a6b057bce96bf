// Session shell: explicit workflow state per user session, held in memory only.

pub mod export;
pub mod handlers;
pub mod machine;
pub mod store;
