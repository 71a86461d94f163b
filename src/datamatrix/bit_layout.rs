//! ECC200 Data Matrix module placement: the diagonal "L-shape" codeword
//! layout shared by every symbol size. This is the standard placement algorithm common
//! to ECC200 implementations (zxing-cpp's `DMBitMatrixParser::ReadBitMatrix`
//! and libdmtx's `placement.c` implement the same corner-case table).

use crate::bit_matrix::BitMatrix;

/// Read the data region (excluding the fixed L-shaped finder border and
/// alternating clock-track border) into symbol-order codeword bytes.
pub fn read_codewords(matrix: &BitMatrix) -> Vec<u8> {
    let rows = matrix.height();
    let cols = matrix.width();
    let mut placed = vec![false; (rows * cols) as usize];

    let idx = |r: i64, c: i64| -> usize { (r as u32 * cols + c as u32) as usize };
    let mut place = |r: i64, c: i64, _value: bool| {
        let (r, c) = (wrap(r, rows as i64), wrap(c, cols as i64));
        placed[idx(r, c)] = true;
    };

    let mut get = |r: i64, c: i64| -> bool {
        let (rr, cc) = (wrap(r, rows as i64), wrap(c, cols as i64));
        matrix.get(cc as u32, rr as u32)
    };

    let mut pattern = |positions: &[(i64, i64)]| -> [bool; 8] {
        let mut out = [false; 8];
        for (i, &(r, c)) in positions.iter().enumerate() {
            out[i] = get(r, c);
        }
        out
    };

    // Standard 8-bit utah placement relative to a "center" (row, col).
    let mut utah = |row: i64, col: i64| -> [bool; 8] {
        pattern(&[
            (row - 2, col - 2),
            (row - 2, col - 1),
            (row - 1, col - 2),
            (row - 1, col - 1),
            (row - 1, col),
            (row, col - 2),
            (row, col - 1),
            (row, col),
        ])
    };

    let mut place_utah = |row: i64, col: i64, codeword_bits: [bool; 8]| {
        let offsets = [
            (row - 2, col - 2),
            (row - 2, col - 1),
            (row - 1, col - 2),
            (row - 1, col - 1),
            (row - 1, col),
            (row, col - 2),
            (row, col - 1),
            (row, col),
        ];
        for (i, &(r, c)) in offsets.iter().enumerate() {
            place(r, c, codeword_bits[i]);
        }
    };

    let mut codewords = Vec::new();
    let mut row: i64 = 4;
    let mut col: i64 = 0;
    loop {
        if row == rows as i64 && col == 0 {
            place_corner1(&mut place, &mut get, rows as i64, cols as i64);
        }
        if row == rows as i64 - 2 && col == 0 && cols % 4 != 0 {
            place_corner2(&mut place, &mut get, rows as i64, cols as i64);
        }
        if row == rows as i64 - 2 && col == 0 && cols % 8 == 4 {
            place_corner3(&mut place, &mut get, rows as i64, cols as i64);
        }
        if row == rows as i64 + 4 && col == 2 && cols % 8 == 0 {
            place_corner4(&mut place, &mut get, rows as i64, cols as i64);
        }
        loop {
            if row < rows as i64 && col >= 0 && !placed[idx(wrap(row, rows as i64), wrap(col, cols as i64))] {
                let bits8 = utah(row, col);
                place_utah(row, col, bits8);
                codewords.push(pack(bits8));
            }
            row -= 2;
            col += 2;
            if row < 0 || col >= cols as i64 {
                break;
            }
        }
        row += 1;
        col += 3;
        loop {
            if row >= 0 && col < cols as i64 && !placed[idx(wrap(row, rows as i64), wrap(col, cols as i64))] {
                let bits8 = utah(row, col);
                place_utah(row, col, bits8);
                codewords.push(pack(bits8));
            }
            row += 3;
            col += 1;
            if row >= rows as i64 || col < 0 {
                break;
            }
        }
        row += 3;
        col += 1;
        if row >= rows as i64 && col >= cols as i64 {
            break;
        }
    }

    codewords
}

fn wrap(v: i64, bound: i64) -> i64 {
    ((v % bound) + bound) % bound
}

fn pack(bits: [bool; 8]) -> u8 {
    let mut b = 0u8;
    for bit in bits {
        b = (b << 1) | bit as u8;
    }
    b
}

fn place_corner1(place: &mut impl FnMut(i64, i64, bool), get: &mut impl FnMut(i64, i64) -> bool, rows: i64, cols: i64) {
    let positions = [(rows - 1, 0), (rows - 1, 1), (rows - 1, 2), (0, cols - 2), (0, cols - 1), (1, cols - 1), (2, cols - 1), (3, cols - 1)];
    for &(r, c) in &positions {
        let v = get(r, c);
        place(r, c, v);
    }
}

fn place_corner2(place: &mut impl FnMut(i64, i64, bool), get: &mut impl FnMut(i64, i64) -> bool, rows: i64, cols: i64) {
    let positions = [(rows - 3, 0), (rows - 2, 0), (rows - 1, 0), (0, cols - 4), (0, cols - 3), (0, cols - 2), (0, cols - 1), (1, cols - 1)];
    for &(r, c) in &positions {
        let v = get(r, c);
        place(r, c, v);
    }
}

fn place_corner3(place: &mut impl FnMut(i64, i64, bool), get: &mut impl FnMut(i64, i64) -> bool, rows: i64, cols: i64) {
    let positions = [(rows - 3, 0), (rows - 2, 0), (rows - 1, 0), (0, cols - 2), (0, cols - 1), (1, cols - 1), (2, cols - 1), (3, cols - 1)];
    for &(r, c) in &positions {
        let v = get(r, c);
        place(r, c, v);
    }
}

fn place_corner4(place: &mut impl FnMut(i64, i64, bool), get: &mut impl FnMut(i64, i64) -> bool, rows: i64, cols: i64) {
    let positions = [(rows - 1, 0), (rows - 1, cols - 1), (0, cols - 3), (0, cols - 2), (0, cols - 1), (1, cols - 3), (1, cols - 2), (1, cols - 1)];
    for &(r, c) in &positions {
        let v = get(r, c);
        place(r, c, v);
    }
}
