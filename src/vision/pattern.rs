//! Anchor-and-branch pixel patterns.
//!
//! A [`Pattern`] locates a shape on screen without fixed coordinates: every
//! pixel tolerable to the anchor color is a candidate, and a candidate is a
//! match when each branch color is also found at its offset from it.
//!
//! Patterns serialize to a compact comma-separated form: the anchor as
//! `r_g_b_t` followed by one `r_g_b_x_y_t` token per branch.

use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

use crate::capture::RasterFrame;
use crate::error::FormatError;
use crate::geometry::{Point, Polygon, Rect};
use crate::vision::Color;

/// The color a pattern search is keyed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnchorPoint {
    pub color: Color,
    pub tolerance: u8,
}

impl AnchorPoint {
    pub const fn new(color: Color, tolerance: u8) -> Self {
        Self { color, tolerance }
    }

    pub fn accepts(&self, color: Color) -> bool {
        self.color.is_tolerable(color, f64::from(self.tolerance))
    }
}

/// A color constraint relative to the anchor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BranchPoint {
    pub offset_x: i32,
    pub offset_y: i32,
    pub color: Color,
    pub tolerance: u8,
}

impl BranchPoint {
    pub const fn new(offset_x: i32, offset_y: i32, color: Color, tolerance: u8) -> Self {
        Self {
            offset_x,
            offset_y,
            color,
            tolerance,
        }
    }

    /// Absolute position of this branch for an anchor at `anchor`,
    /// saturating at the `i32` range.
    pub const fn position(&self, anchor: Point) -> Point {
        anchor.offset(self.offset_x, self.offset_y)
    }

    /// Like [`position`](Self::position), but `None` when the offset leaves
    /// the `i32` range.
    pub const fn checked_position(&self, anchor: Point) -> Option<Point> {
        anchor.checked_offset(self.offset_x, self.offset_y)
    }

    pub fn accepts(&self, color: Color) -> bool {
        self.color.is_tolerable(color, f64::from(self.tolerance))
    }
}

/// Where a pattern search looks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchArea {
    /// Candidate anchor positions; `None` scans the whole frame. Clamped to
    /// the frame before scanning.
    pub bounds: Option<Rect>,
    /// When set, every branch must also lie inside `bounds`.
    pub inclusive: bool,
}

impl SearchArea {
    /// The whole frame.
    pub const fn full() -> Self {
        Self {
            bounds: None,
            inclusive: false,
        }
    }

    /// Anchors inside `rect`; branches may reach outside it.
    pub const fn within(rect: Rect) -> Self {
        Self {
            bounds: Some(rect),
            inclusive: false,
        }
    }

    /// The whole matched shape must lie inside `rect`.
    pub const fn inclusive(rect: Rect) -> Self {
        Self {
            bounds: Some(rect),
            inclusive: true,
        }
    }
}

impl From<Rect> for SearchArea {
    fn from(rect: Rect) -> Self {
        SearchArea::within(rect)
    }
}

/// An anchor plus ordered branch constraints. Immutable once built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    anchor: AnchorPoint,
    branches: Vec<BranchPoint>,
}

impl Pattern {
    pub fn new(anchor: AnchorPoint, branches: Vec<BranchPoint>) -> Self {
        Self { anchor, branches }
    }

    pub fn anchor(&self) -> &AnchorPoint {
        &self.anchor
    }

    pub fn branches(&self) -> &[BranchPoint] {
        &self.branches
    }

    /// Builds a pattern from an anchor token and separate branch tokens.
    pub fn from_tokens<I, S>(anchor: &str, branches: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let anchor = parse_anchor(anchor)?;
        let branches = branches
            .into_iter()
            .map(|token| parse_branch(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(anchor, branches))
    }

    /// True when the anchor and every branch match with the anchor at `p`.
    ///
    /// Branches that fall outside the frame, or whose offset overflows, never
    /// match.
    pub fn is_valid_at(&self, frame: &RasterFrame, p: Point) -> bool {
        self.is_valid_in(frame, p, None)
    }

    fn is_valid_in(&self, frame: &RasterFrame, p: Point, inside: Option<Rect>) -> bool {
        if !self.anchor.accepts(frame.color_at(p.x, p.y)) {
            return false;
        }
        self.branches.iter().all(|branch| {
            let Some(pos) = branch.checked_position(p) else {
                return false;
            };
            if let Some(rect) = inside {
                if !rect.contains(pos) {
                    return false;
                }
            }
            frame
                .try_color_at(pos.x, pos.y)
                .is_some_and(|color| branch.accepts(color))
        })
    }

    /// Lazily yields every valid anchor position in row-major order.
    pub fn matches<'a>(&'a self, frame: &'a RasterFrame, area: SearchArea) -> impl Iterator<Item = Point> + 'a {
        let rect = frame.clamp_area(area.bounds);
        let inside = if area.inclusive { rect } else { None };
        rect.into_iter()
            .flat_map(|r| r.points())
            .filter(move |&p| self.is_valid_in(frame, p, inside))
    }

    pub fn find_all(&self, frame: &RasterFrame, area: SearchArea) -> Vec<Point> {
        self.matches(frame, area).collect()
    }

    /// First match in scan order. Stops scanning at the first hit.
    pub fn find_first(&self, frame: &RasterFrame, area: SearchArea) -> Option<Point> {
        self.matches(frame, area).next()
    }

    /// Match closest to `reference` by Euclidean distance.
    pub fn find_nearest(&self, frame: &RasterFrame, area: SearchArea, reference: Point) -> Option<Point> {
        self.matches(frame, area).min_by(|a, b| {
            a.distance_to(reference)
                .total_cmp(&b.distance_to(reference))
        })
    }

    /// A match chosen uniformly at random.
    pub fn find_random<R: Rng + ?Sized>(&self, frame: &RasterFrame, area: SearchArea, rng: &mut R) -> Option<Point> {
        self.find_all(frame, area).choose(rng).copied()
    }

    pub fn is_present(&self, frame: &RasterFrame, area: SearchArea) -> bool {
        self.find_first(frame, area).is_some()
    }

    /// Outline of the matched shape: the anchor followed by each branch.
    ///
    /// Used to pick a click point inside the shape instead of on the anchor.
    pub fn interaction_polygon(&self, anchor: Point) -> Polygon {
        let mut vertices = Vec::with_capacity(self.branches.len() + 1);
        vertices.push(anchor);
        vertices.extend(self.branches.iter().map(|b| b.position(anchor)));
        Polygon::new(vertices)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.anchor;
        write!(f, "{}_{}_{}_{}", a.color.r, a.color.g, a.color.b, a.tolerance)?;
        for b in &self.branches {
            write!(
                f,
                ",{}_{}_{}_{}_{}_{}",
                b.color.r, b.color.g, b.color.b, b.offset_x, b.offset_y, b.tolerance
            )?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('"').unwrap_or(s);
        let s = s.strip_suffix('"').unwrap_or(s).trim();
        if s.is_empty() {
            return Err(FormatError::Empty);
        }
        let mut tokens = s.split(',');
        let anchor = tokens.next().unwrap_or_default();
        Pattern::from_tokens(anchor, tokens)
    }
}

fn parse_fields(token: &str, expected: usize) -> Result<Vec<i64>, FormatError> {
    let token = token.trim();
    let fields: Vec<&str> = token.split('_').collect();
    if fields.len() != expected {
        return Err(FormatError::FieldCount {
            token: token.to_string(),
            expected,
            found: fields.len(),
        });
    }
    fields
        .iter()
        .map(|field| {
            field
                .trim()
                .parse::<i64>()
                .map_err(|_| FormatError::InvalidNumber {
                    token: token.to_string(),
                    field: field.to_string(),
                })
        })
        .collect()
}

fn byte_field(token: &str, field: &'static str, value: i64) -> Result<u8, FormatError> {
    u8::try_from(value).map_err(|_| FormatError::OutOfRange {
        token: token.trim().to_string(),
        field,
        value,
    })
}

fn offset_field(token: &str, field: &'static str, value: i64) -> Result<i32, FormatError> {
    i32::try_from(value).map_err(|_| FormatError::OutOfRange {
        token: token.trim().to_string(),
        field,
        value,
    })
}

fn parse_color(token: &str, v: &[i64]) -> Result<Color, FormatError> {
    Ok(Color::new(
        byte_field(token, "red", v[0])?,
        byte_field(token, "green", v[1])?,
        byte_field(token, "blue", v[2])?,
    ))
}

fn parse_anchor(token: &str) -> Result<AnchorPoint, FormatError> {
    let v = parse_fields(token, 4)?;
    Ok(AnchorPoint::new(
        parse_color(token, &v)?,
        byte_field(token, "tolerance", v[3])?,
    ))
}

fn parse_branch(token: &str) -> Result<BranchPoint, FormatError> {
    let v = parse_fields(token, 6)?;
    Ok(BranchPoint::new(
        offset_field(token, "x", v[3])?,
        offset_field(token, "y", v[4])?,
        parse_color(token, &v)?,
        byte_field(token, "tolerance", v[5])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BACKGROUND: Color = Color::new(10, 10, 10);

    fn sample_pattern() -> Pattern {
        Pattern::new(
            AnchorPoint::new(Color::new(200, 50, 50), 0),
            vec![
                BranchPoint::new(3, 0, Color::new(50, 200, 50), 0),
                BranchPoint::new(0, 4, Color::new(50, 50, 200), 0),
                BranchPoint::new(-2, -1, Color::new(120, 120, 0), 0),
            ],
        )
    }

    /// Renders `pattern` exactly at each anchor position on a uniform background.
    fn render(pattern: &Pattern, anchors: &[Point]) -> image::RgbaImage {
        let mut img = RasterFrame::filled(40, 40, BACKGROUND).as_image().clone();
        for &a in anchors {
            img.put_pixel(a.x as u32, a.y as u32, pattern.anchor().color.into());
            for b in pattern.branches() {
                let p = b.position(a);
                img.put_pixel(p.x as u32, p.y as u32, b.color.into());
            }
        }
        img
    }

    #[test]
    fn test_exact_match_found_at_anchor() {
        let pattern = sample_pattern();
        let frame = RasterFrame::new(render(&pattern, &[Point::new(10, 10)]));
        assert_eq!(
            pattern.find_first(&frame, SearchArea::full()),
            Some(Point::new(10, 10))
        );
        assert_eq!(pattern.find_all(&frame, SearchArea::full()), vec![Point::new(10, 10)]);
        assert!(pattern.is_present(&frame, SearchArea::full()));
    }

    #[test]
    fn test_corrupted_branch_rejects_candidate() {
        let pattern = sample_pattern();
        let mut img = render(&pattern, &[Point::new(10, 10)]);
        img.put_pixel(10, 14, BACKGROUND.into());
        let frame = RasterFrame::new(img);
        assert_eq!(pattern.find_first(&frame, SearchArea::full()), None);
        assert!(pattern.find_all(&frame, SearchArea::full()).is_empty());
    }

    #[test]
    fn test_tolerance_allows_close_colors() {
        let pattern = Pattern::new(AnchorPoint::new(Color::new(100, 100, 100), 5), Vec::new());
        let mut img = RasterFrame::filled(8, 8, Color::BLACK).as_image().clone();
        img.put_pixel(2, 3, Color::new(105, 104, 106).into());
        img.put_pixel(6, 6, Color::new(120, 100, 100).into());
        let frame = RasterFrame::new(img);
        assert_eq!(pattern.find_all(&frame, SearchArea::full()), vec![Point::new(2, 3)]);
    }

    #[test]
    fn test_empty_branch_list_matches_every_anchor_pixel() {
        let pattern = Pattern::new(AnchorPoint::new(Color::WHITE, 0), Vec::new());
        let frame = RasterFrame::from_fn(6, 6, |x, y| {
            if (x + y) % 2 == 0 { Color::WHITE } else { Color::BLACK }
        });
        assert_eq!(pattern.find_all(&frame, SearchArea::full()).len(), 18);
    }

    #[test]
    fn test_search_area_limits_candidates() {
        let pattern = sample_pattern();
        let frame = RasterFrame::new(render(&pattern, &[Point::new(5, 5), Point::new(25, 25)]));
        let area = SearchArea::within(Rect::new(20, 20, 20, 20));
        assert_eq!(pattern.find_all(&frame, area), vec![Point::new(25, 25)]);
    }

    #[test]
    fn test_inclusive_area_requires_branches_inside() {
        let pattern = sample_pattern();
        let frame = RasterFrame::new(render(&pattern, &[Point::new(10, 10)]));
        let rect = Rect::new(8, 8, 5, 5);
        assert_eq!(
            pattern.find_first(&frame, SearchArea::within(rect)),
            Some(Point::new(10, 10))
        );
        assert_eq!(pattern.find_first(&frame, SearchArea::inclusive(rect)), None);
        let wide = Rect::new(5, 5, 15, 15);
        assert_eq!(
            pattern.find_first(&frame, SearchArea::inclusive(wide)),
            Some(Point::new(10, 10))
        );
    }

    #[test]
    fn test_branch_outside_frame_never_matches() {
        let pattern = Pattern::new(
            AnchorPoint::new(Color::WHITE, 0),
            vec![BranchPoint::new(-1, 0, Color::BLACK, 0)],
        );
        let frame = RasterFrame::filled(3, 1, Color::WHITE);
        assert!(pattern.find_all(&frame, SearchArea::full()).is_empty());
    }

    #[test]
    fn test_extreme_offsets_scan_without_overflow() {
        let pattern: Pattern = "255_255_255_0,0_0_0_2147483647_0_0,0_0_0_-2147483648_0_0"
            .parse()
            .unwrap();
        let frame = RasterFrame::filled(3, 3, Color::WHITE);
        assert_eq!(pattern.find_first(&frame, SearchArea::full()), None);
        assert!(pattern.find_all(&frame, SearchArea::inclusive(frame.bounds())).is_empty());
        assert_eq!(pattern.branches()[0].checked_position(Point::new(1, 0)), None);
    }

    #[test]
    fn test_oversized_search_area_is_clamped() {
        let pattern = Pattern::new(AnchorPoint::new(Color::WHITE, 0), Vec::new());
        let frame = RasterFrame::filled(3, 3, Color::WHITE);
        let area = SearchArea::within(Rect::new(1, 0, i32::MAX, 3));
        assert_eq!(pattern.find_all(&frame, area).len(), 6);
    }

    #[test]
    fn test_find_nearest() {
        let pattern = sample_pattern();
        let frame = RasterFrame::new(render(&pattern, &[Point::new(5, 5), Point::new(30, 30)]));
        assert_eq!(
            pattern.find_nearest(&frame, SearchArea::full(), Point::new(28, 28)),
            Some(Point::new(30, 30))
        );
        assert_eq!(
            pattern.find_nearest(&frame, SearchArea::full(), Point::new(0, 0)),
            Some(Point::new(5, 5))
        );
    }

    #[test]
    fn test_find_random_picks_a_match() {
        let pattern = sample_pattern();
        let anchors = [Point::new(5, 5), Point::new(30, 30)];
        let frame = RasterFrame::new(render(&pattern, &anchors));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let p = pattern.find_random(&frame, SearchArea::full(), &mut rng).unwrap();
            assert!(anchors.contains(&p));
        }
        let blank = RasterFrame::filled(10, 10, BACKGROUND);
        assert_eq!(pattern.find_random(&blank, SearchArea::full(), &mut rng), None);
    }

    #[test]
    fn test_interaction_polygon() {
        let poly = sample_pattern().interaction_polygon(Point::new(10, 10));
        assert_eq!(
            poly.vertices,
            vec![
                Point::new(10, 10),
                Point::new(13, 10),
                Point::new(10, 14),
                Point::new(8, 9)
            ]
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let pattern = sample_pattern();
        let text = pattern.to_string();
        assert_eq!(text, "200_50_50_0,50_200_50_3_0_0,50_50_200_0_4_0,120_120_0_-2_-1_0");
        let parsed: Pattern = text.parse().unwrap();
        assert_eq!(parsed, pattern);
    }

    #[test]
    fn test_parse_accepts_quotes_and_spaces() {
        let parsed: Pattern = "\" 1_2_3_4 , 5_6_7_-8_9_10 \"".parse().unwrap();
        assert_eq!(parsed.anchor(), &AnchorPoint::new(Color::new(1, 2, 3), 4));
        assert_eq!(
            parsed.branches(),
            &[BranchPoint::new(-8, 9, Color::new(5, 6, 7), 10)]
        );
    }

    #[test]
    fn test_from_tokens() {
        let pattern = Pattern::from_tokens("200_50_50_0", ["50_200_50_3_0_0"]).unwrap();
        assert_eq!(pattern.branches().len(), 1);
        let err = Pattern::from_tokens("200_50_50_0", ["50_200_50_3_0"]).unwrap_err();
        assert!(matches!(err, FormatError::FieldCount { expected: 6, found: 5, .. }));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Pattern>(), Err(FormatError::Empty));
        assert_eq!("\"\"".parse::<Pattern>(), Err(FormatError::Empty));
        assert!(matches!(
            "1_2_3".parse::<Pattern>(),
            Err(FormatError::FieldCount { expected: 4, found: 3, .. })
        ));
        assert!(matches!(
            "1_2_x_4".parse::<Pattern>(),
            Err(FormatError::InvalidNumber { .. })
        ));
        assert!(matches!(
            "256_0_0_0".parse::<Pattern>(),
            Err(FormatError::OutOfRange { field: "red", value: 256, .. })
        ));
        assert!(matches!(
            "1_2_3_4,1_2_3_4".parse::<Pattern>(),
            Err(FormatError::FieldCount { expected: 6, found: 4, .. })
        ));
    }
}
