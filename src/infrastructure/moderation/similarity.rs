/// Similarity of two strings in `[0, 1]`, derived from their edit distance
/// relative to the longer string. Two empty strings are identical.
pub fn compute_similarity(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (longer, shorter, longer_len) = if a_len > b_len {
        (a, b, a_len)
    } else {
        (b, a, b_len)
    };

    if longer_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(longer, shorter);
    (longer_len - distance) as f64 / longer_len as f64
}

/// Unit-cost insert/delete/substitute edit distance over characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, val) in dp[0].iter_mut().enumerate() {
        *val = j;
    }
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if b[i - 1] == a[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j - 1].min(dp[i][j - 1]).min(dp[i - 1][j])
            };
        }
    }
    dp[n][m]
}
