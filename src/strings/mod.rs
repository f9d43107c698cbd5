pub mod palindrome;
