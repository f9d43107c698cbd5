pub mod inorder;
