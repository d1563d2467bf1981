/// `n` evenly spaced samples over `[start, stop]`, both ends inclusive.
///
/// Sample `i` is `start + i * step` with `step = (stop - start) / (n - 1)`;
/// the last sample is pinned to `stop` so the far edge of a region is hit
/// exactly. `n == 1` yields `[start]` and `n == 0` yields nothing.
#[must_use]
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;

            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + i as f64 * step
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn test_linspace_includes_both_endpoints() {
        let samples = linspace(-2.0, 1.0, 4);

        assert_eq!(samples, vec![-2.0, -1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_linspace_last_sample_is_exact_stop() {
        let samples = linspace(-2.25, 1.25, 800);

        assert_eq!(samples.len(), 800);
        assert_eq!(samples[0], -2.25);
        assert_eq!(samples[799], 1.25);
    }

    #[test]
    fn test_linspace_is_evenly_spaced() {
        let samples = linspace(0.0, 1.0, 11);

        for pair in samples.windows(2) {
            assert!((pair[1] - pair[0] - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linspace_single_and_empty() {
        assert_eq!(linspace(3.0, 5.0, 1), vec![3.0]);
        assert!(linspace(3.0, 5.0, 0).is_empty());
    }
}
