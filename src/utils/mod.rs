pub mod helper;

mod deque;
pub use deque::Deque;
