//! Parse placement tokens into [`PlacementRequest`]s

use std::convert::Infallible;
use std::str::FromStr;

use pest::Parser;
use pest::iterators::Pair;

use crate::log::{debug, warn};
use crate::placement::{Placement, PlacementRequest};
use crate::{PlacementGrammar, Rule};

/// Parse a placement token such as `"top"`, `"bottom-right"` or
/// `"auto left-top"`.
///
/// Never fails: anything unrecognized falls back to `top` / `center`, so a
/// garbage token behaves like `"top"`.
pub fn parse_placement(token: &str) -> PlacementRequest {
    match PlacementGrammar::parse(Rule::placement, token) {
        Ok(mut pairs) => pairs.next().map(build_request).unwrap_or_default(),
        Err(_e) => {
            warn!(token, error = %_e, "placement token did not match the grammar");
            PlacementRequest::default()
        }
    }
}

fn build_request(pair: Pair<Rule>) -> PlacementRequest {
    let mut auto = false;
    let mut primary = "";
    let mut secondary = "";

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::auto_marker => auto = true,
            Rule::primary => primary = inner.as_str(),
            Rule::secondary => secondary = inner.as_str(),
            _ => {}
        }
    }

    let placement = Placement::from_keywords(primary, secondary);
    if placement.side().as_str() != primary {
        debug!(primary, fallback = %placement, "unknown primary side");
    }

    if auto { PlacementRequest::auto(placement) } else { PlacementRequest::new(placement) }
}

impl FromStr for PlacementRequest {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_placement(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Align;

    fn placed(token: &str) -> (bool, Placement) {
        let request = parse_placement(token);
        (request.auto, request.placement)
    }

    #[test]
    fn parse_primary_only() {
        assert_eq!(placed("top"), (false, Placement::top(Align::Center)));
        assert_eq!(placed("bottom"), (false, Placement::bottom(Align::Center)));
        assert_eq!(placed("left"), (false, Placement::left(Align::Center)));
        assert_eq!(placed("right"), (false, Placement::right(Align::Center)));
    }

    #[test]
    fn parse_explicit_center() {
        assert_eq!(placed("top-center"), (false, Placement::top(Align::Center)));
        assert_eq!(placed("left-center"), (false, Placement::left(Align::Center)));
    }

    #[test]
    fn parse_vertical_primary_with_horizontal_secondary() {
        assert_eq!(placed("top-left"), (false, Placement::top(Align::Start)));
        assert_eq!(placed("top-right"), (false, Placement::top(Align::End)));
        assert_eq!(placed("bottom-left"), (false, Placement::bottom(Align::Start)));
        assert_eq!(placed("bottom-right"), (false, Placement::bottom(Align::End)));
    }

    #[test]
    fn parse_horizontal_primary_with_vertical_secondary() {
        assert_eq!(placed("left-top"), (false, Placement::left(Align::Start)));
        assert_eq!(placed("left-bottom"), (false, Placement::left(Align::End)));
        assert_eq!(placed("right-top"), (false, Placement::right(Align::Start)));
        assert_eq!(placed("right-bottom"), (false, Placement::right(Align::End)));
    }

    #[test]
    fn parse_auto_marker() {
        assert_eq!(placed("auto top-left"), (true, Placement::top(Align::Start)));
        assert_eq!(placed("auto left"), (true, Placement::left(Align::Center)));
        assert_eq!(placed("AUTO bottom"), (true, Placement::bottom(Align::Center)));
    }

    #[test]
    fn parse_auto_alone_is_auto_top() {
        assert_eq!(placed("auto"), (true, Placement::top(Align::Center)));
        assert_eq!(placed("auto "), (true, Placement::top(Align::Center)));
    }

    #[test]
    fn parse_auto_needs_a_separator() {
        // "autotop" is an unknown primary, not "auto top"
        assert_eq!(placed("autotop"), (false, Placement::top(Align::Center)));
        assert_eq!(placed("automatic-left"), (false, Placement::top(Align::Start)));
    }

    #[test]
    fn parse_surrounding_whitespace() {
        assert_eq!(placed("  auto   right-top "), (true, Placement::right(Align::Start)));
        assert_eq!(placed("\tbottom"), (false, Placement::bottom(Align::Center)));
    }

    #[test]
    fn parse_nonsense_defaults_to_top_center() {
        assert_eq!(parse_placement("nonsense"), PlacementRequest::default());
        assert_eq!(parse_placement("other"), PlacementRequest::default());
        assert_eq!(parse_placement(""), PlacementRequest::default());
        assert_eq!(parse_placement("-"), PlacementRequest::default());
    }

    #[test]
    fn parse_unknown_primary_keeps_secondary() {
        assert_eq!(placed("garbage-left"), (false, Placement::top(Align::Start)));
    }

    #[test]
    fn parse_unknown_or_wrong_axis_secondary_centers() {
        assert_eq!(placed("top-middle"), (false, Placement::top(Align::Center)));
        assert_eq!(placed("top-top"), (false, Placement::top(Align::Center)));
        assert_eq!(placed("right-left"), (false, Placement::right(Align::Center)));
    }

    #[test]
    fn parse_ignores_trailing_segments() {
        assert_eq!(placed("bottom-left-extra"), (false, Placement::bottom(Align::Start)));
        assert_eq!(placed("left top"), (false, Placement::left(Align::Center)));
    }

    #[test]
    fn parse_keywords_are_case_sensitive() {
        assert_eq!(placed("Bottom"), (false, Placement::top(Align::Center)));
    }

    #[test]
    fn from_str_round_trips_display() {
        for token in ["top", "bottom-left", "auto right-bottom", "auto left"] {
            let request: PlacementRequest = token.parse().unwrap();
            assert_eq!(request.to_string(), token);
        }
    }
}
