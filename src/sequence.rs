use anyhow::Context as _;
use itertools::Itertools as _;

/// Returns the `n`-th Fibonacci value: F(0) = 0, F(1) = 1, and
/// F(n) = F(n-1) + F(n-2) for n ≥ 2.
///
/// Computed iteratively. Values are `u64`; F(93) is the largest one that
/// fits, and anything beyond is reported as an error instead of wrapping.
pub fn nth(n: u32) -> anyhow::Result<u64> {
    let (mut prev, mut cur) = (0, 1_u64);

    for i in 2..=n {
        let next = checked_step(prev, cur, i)?;
        prev = cur;
        cur = next;
    }

    Ok(if n == 0 { 0 } else { cur })
}

/// Returns `[F(0), F(1), ..., F(count - 1)]` in order.
pub fn leading(count: u32) -> anyhow::Result<Vec<u64>> {
    let mut values = Vec::with_capacity(count as usize);

    for n in 0..count as usize {
        let value = match n {
            0 => 0,
            1 => 1,
            _ => checked_step(values[n - 2], values[n - 1], n as u32)?,
        };
        values.push(value);
    }

    Ok(values)
}

/// Renders `F(0)` through `F(count - 1)` as one line, each value followed by
/// a single space, terminated by a newline.
///
/// `render(0)` is just the newline.
pub fn render(count: u32) -> anyhow::Result<String> {
    let values = leading(count)?;

    Ok(format!(
        "{}\n",
        values
            .iter()
            .format_with("", |value, f| f(&format_args!("{} ", value))),
    ))
}

fn checked_step(prev: u64, cur: u64, n: u32) -> anyhow::Result<u64> {
    prev.checked_add(cur)
        .with_context(|| format!("fibonacci({}) does not fit in a 64-bit integer", n))
}
