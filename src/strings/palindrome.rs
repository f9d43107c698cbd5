/// Longest palindromic substring of `s`, found by expanding around each of
/// the `2 * len - 1` candidate centers. Works on `char` boundaries, so
/// multi-byte input never splits a code point. O(n^2) worst case, O(1)
/// auxiliary space beyond the scratch buffer and the result.
///
/// The running best is only replaced by a strictly longer palindrome, so
/// ties keep the earliest center: `"babad"` yields `"bab"`, not `"aba"`.
pub fn longest_palindrome(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    // Inclusive span of the best palindrome seen so far.
    let (mut start, mut end) = (0, 0);
    for i in 0..chars.len() {
        let odd = expand_from_center(&chars, i, i);
        let even = expand_from_center(&chars, i, i + 1);
        let len = odd.max(even);
        if len > end - start + 1 {
            start = i - (len - 1) / 2;
            end = i + len / 2;
        }
    }

    chars[start..=end].iter().collect()
}

/// Length of the longest palindrome centered at `(left, right)`: the two
/// indices are equal for odd-length candidates and adjacent for even ones.
fn expand_from_center(chars: &[char], mut left: usize, mut right: usize) -> usize {
    let mut len = 0;
    while right < chars.len() && chars[left] == chars[right] {
        len = right - left + 1;
        right += 1;
        if left == 0 {
            break;
        }
        left -= 1;
    }
    len
}
