use super::PatternCells;
use crate::LifeError;

/// Upper bound on `x * y` accepted from a header.
const MAX_PATTERN_CELLS: usize = 1 << 24;

fn rle_error(msg: impl Into<String>) -> LifeError {
    LifeError::Rle(msg.into())
}

/// Parses a pattern in RLE format (`x = .., y = ..` header, `b`/`o`/`$`/`!` body).
pub fn parse_rle(text: &str) -> Result<PatternCells, LifeError> {
    let data = text.as_bytes();
    let parse_next_number = |i: &mut usize| -> Result<usize, LifeError> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            *i += 1;
        }
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        let ans = text[*i..j]
            .parse::<usize>()
            .map_err(|e| rle_error(format!("bad number at byte {}: {}", *i, e)))?;
        *i = j;
        Ok(ans)
    };

    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && (data[i] == b'#' || data[i].is_ascii_whitespace()) {
        if data[i] == b'#' {
            while i < data.len() && data[i] != b'\n' {
                i += 1;
            }
        }
        i += 1;
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(rle_error("missing `x = .., y = ..` header"));
    }
    let header_end = data[i..]
        .iter()
        .position(|&c| c == b'\n')
        .map_or(data.len(), |p| i + p);
    let mut header_pos = i;
    let width = parse_next_number(&mut header_pos)?;
    let height = parse_next_number(&mut header_pos)?;
    if header_pos > header_end {
        return Err(rle_error("header must contain both `x` and `y`"));
    }
    if width == 0 || height == 0 {
        return Err(rle_error(format!("empty pattern {}x{}", width, height)));
    }

    let size = width
        .checked_mul(height)
        .filter(|&size| size <= MAX_PATTERN_CELLS)
        .ok_or_else(|| rle_error(format!("pattern {}x{} is too large", width, height)))?;
    let mut cells = vec![false; size];
    i = header_end + 1;
    // run-length encoded pattern data
    let (mut x, mut y, mut cnt) = (0usize, 0usize, 1usize);
    while i < data.len() {
        match data[i] {
            b'0'..=b'9' => cnt = parse_next_number(&mut i)?,
            b'o' => {
                let end = x
                    .checked_add(cnt)
                    .filter(|&end| end <= width && y < height)
                    .ok_or_else(|| rle_error(format!("live run at ({}, {}) overflows", x, y)))?;
                cells[x + y * width..end + y * width].fill(true);
                (x, i, cnt) = (end, i + 1, 1);
            }
            b'b' => {
                x = x
                    .checked_add(cnt)
                    .filter(|&end| end <= width)
                    .ok_or_else(|| rle_error(format!("row {} is wider than {}", y, width)))?;
                (i, cnt) = (i + 1, 1);
            }
            b'$' => {
                y = y
                    .checked_add(cnt)
                    .filter(|&y| y <= height)
                    .ok_or_else(|| rle_error(format!("more than {} rows", height)))?;
                (x, i, cnt) = (0, i + 1, 1);
            }
            b'!' => break,
            c if c.is_ascii_whitespace() => i += 1,
            c => return Err(rle_error(format!("unexpected symbol `{}`", c as char))),
        };
    }
    Ok(PatternCells {
        width,
        height,
        cells,
    })
}
