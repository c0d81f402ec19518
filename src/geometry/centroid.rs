/// Returns the arithmetic mean of `positions`, or the origin when empty.
pub fn centroid<I>(positions: I) -> [f64; 3]
where
    I: IntoIterator<Item = [f64; 3]>,
{
    let mut sum = [0.0; 3];
    let mut count = 0usize;
    for p in positions {
        sum[0] += p[0];
        sum[1] += p[1];
        sum[2] += p[2];
        count += 1;
    }

    if count == 0 {
        return [0.0; 3];
    }

    let n = count as f64;
    [sum[0] / n, sum[1] / n, sum[2] / n]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn empty_input_is_origin() {
        assert_eq!(centroid(std::iter::empty()), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn single_point_is_itself() {
        assert_eq!(centroid([[2.0, -1.0, 5.0]]), [2.0, -1.0, 5.0]);
    }

    #[test]
    fn mean_of_several_points() {
        let c = centroid([[0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [1.0, 3.0, -3.0]]);
        assert!(approx_eq(c[0], 1.0, 1e-12));
        assert!(approx_eq(c[1], 1.0, 1e-12));
        assert!(approx_eq(c[2], -1.0, 1e-12));
    }
}
