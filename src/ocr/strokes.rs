//! Stroke coordinates of the status line font.
//!
//! Each entry lists the foreground pixels of one character relative to its
//! top-left corner. Shadow pixels are derived when the table is loaded.

pub(crate) const STROKES: &[(char, &[(i32, i32)])] = &[
    (
        'a',
        &[
            (1, 0), (2, 0), (3, 0), (4, 1), (1, 2), (2, 2), (3, 2), (4, 2), (0, 3), (4, 3), (0, 4),
            (4, 4), (1, 5), (2, 5), (3, 5), (4, 5),
        ],
    ),
    (
        'b',
        &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8), (1, 3), (2, 3),
            (3, 3), (1, 8), (2, 8), (3, 8), (4, 4), (4, 5), (4, 6), (4, 7),
        ],
    ),
    (
        'c',
        &[
            (1, 0), (2, 0), (3, 0), (0, 1), (0, 2), (0, 3), (0, 4), (4, 1), (4, 4), (1, 5), (2, 5),
            (3, 5),
        ],
    ),
    (
        'd',
        &[
            (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6), (4, 7), (4, 8), (1, 3), (2, 3),
            (3, 3), (0, 4), (0, 5), (0, 6), (0, 7), (1, 8), (2, 8), (3, 8),
        ],
    ),
    (
        'e',
        &[
            (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (0, 3),
            (0, 4), (4, 4), (1, 5), (2, 5), (3, 5),
        ],
    ),
    (
        'f',
        &[
            (2, 0), (3, 0), (1, 1), (1, 2), (0, 3), (1, 3), (2, 3), (3, 3), (1, 4), (1, 5), (1, 6),
            (1, 7), (1, 8),
        ],
    ),
    (
        'g',
        &[
            (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (0, 2), (0, 3), (0, 4), (4, 1), (4, 2), (4, 3),
            (4, 4), (1, 5), (2, 5), (3, 5), (4, 5), (4, 6), (3, 7), (2, 7), (1, 7),
        ],
    ),
    (
        'h',
        &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8), (1, 3), (2, 3),
            (3, 3), (4, 4), (4, 5), (4, 6), (4, 7), (4, 8),
        ],
    ),
    ('i', &[(0, 0), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8)]),
    (
        'j',
        &[
            (0, 10), (1, 3), (1, 10), (2, 0), (2, 3), (2, 4), (2, 5), (2, 6), (2, 7), (2, 8),
            (2, 9),
        ],
    ),
    (
        'k',
        &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8), (1, 6), (2, 5),
            (2, 6), (3, 4), (3, 7), (4, 3), (4, 8),
        ],
    ),
    ('l', &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8)]),
    (
        'm',
        &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 0), (2, 0), (3, 0), (4, 1), (4, 2),
            (4, 3), (4, 4), (4, 5), (5, 0), (6, 0), (7, 0), (8, 1), (8, 2), (8, 3), (8, 4), (8, 5),
        ],
    ),
    (
        'n',
        &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 0), (2, 0), (3, 0), (4, 1), (4, 2),
            (4, 3), (4, 4), (4, 5),
        ],
    ),
    (
        'o',
        &[
            (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (0, 2), (4, 2), (0, 3), (4, 3), (0, 4), (4, 4),
            (1, 5), (2, 5), (3, 5),
        ],
    ),
    (
        'p',
        &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (1, 0), (2, 0), (3, 0),
            (1, 5), (2, 5), (3, 5), (4, 1), (4, 2), (4, 3), (4, 4),
        ],
    ),
    (
        'q',
        &[
            (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (4, 1), (0, 2), (4, 2), (0, 3), (4, 3), (0, 4),
            (4, 4), (1, 5), (2, 5), (3, 5), (4, 5), (4, 6), (4, 7),
        ],
    ),
    ('r', &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 1), (2, 0), (3, 0)]),
    (
        's',
        &[
            (1, 0), (2, 0), (3, 0), (0, 1), (0, 2), (1, 2), (2, 3), (3, 3), (3, 4), (0, 5), (1, 5),
            (2, 5),
        ],
    ),
    (
        't',
        &[
            (1, 0), (1, 1), (0, 2), (1, 2), (2, 2), (3, 2), (1, 3), (1, 4), (1, 5), (1, 6), (2, 7),
            (3, 7),
        ],
    ),
    (
        'u',
        &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (1, 5),
            (2, 5), (3, 5), (4, 5),
        ],
    ),
    ('v', &[(0, 0), (4, 0), (0, 1), (4, 1), (1, 2), (3, 2), (1, 3), (3, 3), (2, 4), (2, 4)]),
    (
        'w',
        &[
            (0, 0), (3, 0), (6, 0), (0, 1), (3, 1), (6, 1), (0, 2), (2, 2), (4, 2), (6, 2), (0, 3),
            (2, 3), (4, 3), (6, 3), (1, 4), (5, 4), (1, 5), (5, 5),
        ],
    ),
    ('x', &[(0, 0), (4, 0), (1, 1), (3, 1), (2, 2), (2, 3), (1, 4), (3, 4), (0, 5), (4, 5)]),
    (
        'y',
        &[
            (0, 0), (4, 0), (1, 1), (1, 2), (1, 3), (3, 1), (3, 2), (3, 3), (2, 4), (2, 5), (2, 6),
            (1, 7),
        ],
    ),
    (
        'z',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (2, 2), (1, 3), (0, 4), (0, 5), (1, 5), (2, 5),
            (3, 5),
        ],
    ),
    (
        'A',
        &[
            (2, 0), (3, 0), (2, 1), (3, 1), (1, 2), (4, 2), (1, 3), (4, 3), (1, 4), (4, 4), (0, 5),
            (1, 5), (2, 5), (3, 5), (4, 5), (5, 5), (0, 6), (5, 6), (0, 7), (5, 7),
        ],
    ),
    (
        'B',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3),
            (3, 3), (4, 3), (0, 4), (5, 4), (0, 5), (5, 5), (0, 6), (5, 6), (0, 7), (1, 7), (2, 7),
            (3, 7), (4, 7),
        ],
    ),
    (
        'C',
        &[
            (2, 0), (3, 0), (4, 0), (5, 0), (1, 1), (6, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 6),
            (6, 6), (2, 7), (3, 7), (4, 7), (5, 7),
        ],
    ),
    (
        'D',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (5, 1), (0, 2), (6, 2), (0, 3), (6, 3),
            (0, 4), (6, 4), (0, 5), (6, 5), (0, 6), (5, 6), (0, 7), (1, 7), (2, 7), (3, 7), (4, 7),
        ],
    ),
    (
        'E',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (0, 2), (0, 3), (1, 3), (2, 3), (3, 3),
            (4, 3), (0, 4), (0, 5), (0, 6), (0, 7), (1, 7), (2, 7), (3, 7), (4, 7),
        ],
    ),
    (
        'F',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (0, 2), (0, 3), (1, 3), (2, 3), (3, 3),
            (0, 4), (0, 5), (0, 6), (0, 7),
        ],
    ),
    (
        'G',
        &[
            (2, 0), (3, 0), (4, 0), (5, 0), (1, 1), (6, 1), (0, 2), (0, 3), (0, 4), (0, 5), (1, 6),
            (2, 7), (3, 7), (4, 7), (5, 7), (6, 6), (6, 5), (6, 4), (5, 4), (4, 4),
        ],
    ),
    (
        'H',
        &[
            (0, 0), (5, 0), (0, 1), (5, 1), (0, 2), (5, 2), (0, 3), (1, 3), (2, 3), (3, 3), (4, 3),
            (5, 3), (0, 4), (5, 4), (0, 5), (5, 5), (0, 6), (5, 6), (0, 7), (5, 7),
        ],
    ),
    (
        'I',
        &[
            (0, 0), (1, 0), (2, 0), (1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (0, 7), (1, 7),
            (2, 7),
        ],
    ),
    (
        'J',
        &[
            (1, 0), (2, 0), (3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5), (3, 6), (0, 7), (1, 7),
            (2, 7),
        ],
    ),
    (
        'K',
        &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (1, 4), (2, 3), (2, 4),
            (3, 2), (3, 5), (4, 1), (4, 6), (5, 0), (5, 7),
        ],
    ),
    (
        'L',
        &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (1, 7), (2, 7), (3, 7),
            (4, 7),
        ],
    ),
    (
        'M',
        &[
            (0, 0), (1, 0), (5, 0), (6, 0), (0, 1), (1, 1), (5, 1), (6, 1), (0, 2), (2, 2), (4, 2),
            (6, 2), (0, 3), (2, 3), (4, 3), (6, 3), (0, 4), (3, 4), (6, 4), (0, 5), (3, 5), (6, 5),
            (0, 6), (6, 6), (0, 7), (6, 7),
        ],
    ),
    (
        'N',
        &[
            (0, 0), (1, 0), (5, 0), (0, 1), (1, 1), (5, 1), (0, 2), (2, 2), (5, 2), (0, 3), (2, 3),
            (5, 3), (0, 4), (3, 4), (5, 4), (0, 5), (3, 5), (5, 5), (0, 6), (4, 6), (5, 6), (0, 7),
            (4, 7), (5, 7),
        ],
    ),
    (
        'O',
        &[
            (2, 0), (3, 0), (4, 0), (1, 1), (5, 1), (0, 2), (6, 2), (0, 3), (6, 3), (0, 4), (6, 4),
            (0, 5), (6, 5), (1, 6), (5, 6), (2, 7), (3, 7), (4, 7),
        ],
    ),
    (
        'P',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (0, 2), (4, 2), (0, 3), (4, 3), (0, 4),
            (1, 4), (2, 4), (3, 4), (0, 5), (0, 6), (0, 7),
        ],
    ),
    (
        'Q',
        &[
            (2, 0), (3, 0), (4, 0), (1, 1), (5, 1), (0, 2), (6, 2), (0, 3), (6, 3), (0, 4), (6, 4),
            (0, 5), (6, 5), (1, 6), (5, 6), (2, 7), (3, 7), (4, 7), (4, 8), (5, 9), (6, 9),
        ],
    ),
    (
        'R',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (0, 2), (4, 2), (0, 3), (4, 3), (0, 4),
            (1, 4), (2, 4), (3, 4), (0, 5), (0, 6), (0, 7), (3, 5), (4, 6), (5, 7),
        ],
    ),
    (
        'S',
        &[
            (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (5, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 4),
            (5, 5), (5, 6), (0, 6), (1, 7), (2, 7), (3, 7), (4, 7),
        ],
    ),
    (
        'T',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (3, 1), (3, 2), (3, 3), (3, 4),
            (3, 5), (3, 6), (3, 7),
        ],
    ),
    (
        'U',
        &[
            (0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 7), (2, 7), (3, 7), (4, 7),
            (5, 6), (5, 5), (5, 4), (5, 3), (5, 2), (5, 1), (5, 0),
        ],
    ),
    (
        'V',
        &[
            (0, 0), (5, 0), (0, 1), (5, 1), (0, 2), (5, 2), (1, 3), (4, 3), (1, 4), (4, 4), (1, 5),
            (4, 5), (2, 6), (3, 6), (2, 7), (3, 7),
        ],
    ),
    (
        'W',
        &[
            (0, 0), (4, 0), (8, 0), (0, 1), (4, 1), (8, 1), (1, 2), (3, 2), (5, 2), (7, 2), (1, 3),
            (3, 3), (5, 3), (7, 3), (1, 4), (3, 4), (5, 4), (7, 4), (1, 5), (3, 5), (5, 5), (7, 5),
            (2, 6), (6, 6), (2, 7), (6, 7),
        ],
    ),
    (
        'X',
        &[
            (0, 0), (5, 0), (0, 1), (5, 1), (1, 2), (4, 2), (2, 3), (3, 3), (2, 4), (3, 4), (1, 5),
            (4, 5), (0, 6), (5, 6), (0, 7), (5, 7),
        ],
    ),
    (
        'Y',
        &[
            (0, 0), (6, 0), (1, 1), (5, 1), (2, 2), (4, 2), (3, 3), (3, 4), (3, 5), (3, 6), (3, 7),
        ],
    ),
    (
        'Z',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (5, 1), (4, 2), (3, 3), (2, 4), (1, 5),
            (0, 6), (0, 7), (1, 7), (2, 7), (3, 7), (4, 7), (5, 7),
        ],
    ),
    (
        '0',
        &[
            (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (0, 2), (4, 2), (0, 3), (4, 3), (0, 4), (4, 4),
            (0, 5), (4, 5), (0, 6), (4, 6), (1, 7), (2, 7), (3, 7),
        ],
    ),
    (
        '1',
        &[
            (2, 0), (0, 1), (1, 1), (2, 1), (2, 2), (2, 3), (2, 4), (2, 5), (2, 6), (0, 7), (1, 7),
            (2, 7), (3, 7), (4, 7),
        ],
    ),
    (
        '2',
        &[
            (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (4, 2), (3, 3), (2, 4), (1, 5), (0, 6), (0, 7),
            (1, 7), (2, 7), (3, 7), (4, 7),
        ],
    ),
    (
        '3',
        &[
            (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (4, 2), (3, 3), (2, 3), (4, 4), (4, 5), (4, 6),
            (0, 6), (1, 7), (2, 7), (3, 7),
        ],
    ),
    (
        '4',
        &[
            (4, 0), (4, 1), (3, 1), (4, 2), (2, 2), (4, 3), (1, 3), (4, 4), (0, 4), (0, 5), (1, 5),
            (2, 5), (3, 5), (4, 5), (5, 5), (4, 6), (4, 7),
        ],
    ),
    (
        '5',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (0, 1), (0, 2), (0, 3), (1, 3), (2, 3), (3, 3),
            (4, 4), (4, 5), (0, 6), (4, 6), (1, 7), (2, 7), (3, 7),
        ],
    ),
    (
        '6',
        &[
            (2, 0), (3, 0), (1, 1), (0, 2), (0, 3), (1, 3), (2, 3), (3, 3), (0, 4), (4, 4), (0, 5),
            (4, 5), (0, 6), (4, 6), (1, 7), (2, 7), (3, 7),
        ],
    ),
    (
        '7',
        &[
            (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (3, 2), (3, 3), (2, 4), (2, 5), (1, 6),
            (1, 7),
        ],
    ),
    (
        '8',
        &[
            (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (0, 2), (4, 2), (1, 3), (2, 3), (3, 3), (0, 4),
            (4, 4), (0, 5), (4, 5), (0, 6), (4, 6), (1, 7), (2, 7), (3, 7),
        ],
    ),
    (
        '9',
        &[
            (1, 0), (2, 0), (3, 0), (0, 1), (4, 1), (0, 2), (4, 2), (0, 3), (4, 3), (1, 4), (2, 4),
            (3, 4), (4, 4), (4, 5), (3, 6), (2, 7), (1, 7),
        ],
    ),
    ('-', &[(0, 0), (1, 0), (2, 0)]),
    ('/', &[(0, 9), (0, 8), (1, 7), (1, 6), (2, 5), (2, 4), (3, 3), (3, 2), (4, 1), (4, 0)]),
    (
        '(',
        &[
            (2, 0), (1, 1), (1, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (1, 8), (1, 9),
            (2, 10),
        ],
    ),
    (
        ')',
        &[
            (0, 0), (1, 1), (1, 2), (2, 3), (2, 4), (2, 5), (2, 6), (2, 7), (1, 8), (1, 9),
            (0, 10),
        ],
    ),
];
