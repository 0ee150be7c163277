// Platform adapters
pub mod storage;
