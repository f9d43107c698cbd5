//! Standalone algorithm exercises, grouped by input category. Each exercise
//! is a pure function with no shared state and no dependency on the others.

pub mod arrays;
pub mod strings;
pub mod trees;
pub mod utils;

pub use arrays::median::find_median_sorted_arrays;
pub use strings::palindrome::longest_palindrome;
pub use trees::inorder::{inorder_traversal, TreeNode};
pub use utils::error::{AlgoError, Result};
