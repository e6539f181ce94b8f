//! Data-driven resolver cases.
//!
//! Each `tests/cases/*.case` file holds one scenario as `key: values` lines:
//!
//! ```text
//! placement: auto top-left
//! host: <top> <left> <width> <height>
//! target: <width> <height>
//! clearance: <top> <bottom> <left> <right>
//! expect: <top> <left> [resolved placement]
//! ```
//!
//! Run with: cargo test --test placement_cases

use std::collections::HashMap;

use datatest_stable::Utf8Path;
use perch::{EdgeOffsets, Rect, Size, parse_placement, resolve_placement};

struct Case {
    placement: String,
    host: Rect,
    target: Size,
    clearance: EdgeOffsets,
    expect_top: f64,
    expect_left: f64,
    expect_placement: Option<String>,
}

fn numbers(fields: &HashMap<&str, &str>, key: &str, count: usize) -> Result<Vec<f64>, String> {
    let raw = fields.get(key).ok_or_else(|| format!("missing `{key}`"))?;
    let values = raw
        .split_whitespace()
        .take(count)
        .map(|v| v.parse::<f64>().map_err(|e| format!("`{key}`: {v:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != count {
        return Err(format!("`{key}` needs {count} numbers, got {}", values.len()));
    }
    Ok(values)
}

fn parse_case(source: &str) -> Result<Case, String> {
    let fields: HashMap<&str, &str> = source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim(), v.trim()))
        .collect();

    let host = numbers(&fields, "host", 4)?;
    let target = numbers(&fields, "target", 2)?;
    let room = numbers(&fields, "clearance", 4)?;
    let expect = numbers(&fields, "expect", 2)?;
    let expect_placement = fields
        .get("expect")
        .and_then(|raw| raw.split_whitespace().nth(2))
        .map(str::to_string);

    Ok(Case {
        placement: fields.get("placement").copied().unwrap_or_default().to_string(),
        host: Rect::new(host[0], host[1], host[2], host[3]),
        target: Size::new(target[0], target[1]),
        clearance: EdgeOffsets::new(room[0], room[1], room[2], room[3]),
        expect_top: expect[0],
        expect_left: expect[1],
        expect_placement,
    })
}

fn test_placement_case(path: &Utf8Path) -> datatest_stable::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let source = std::fs::read_to_string(path)?;
    let case = parse_case(&source).map_err(|e| format!("{path}: {e}"))?;

    let request = parse_placement(&case.placement);
    let pos = resolve_placement(&case.clearance, &case.host, case.target, request);

    assert_eq!(
        (pos.top.raw(), pos.left.raw()),
        (case.expect_top, case.expect_left),
        "{path}: `{}` placed at the wrong coordinate",
        case.placement
    );
    if let Some(expected) = case.expect_placement {
        assert_eq!(pos.placement.to_string(), expected, "{path}: wrong resolved placement");
    }

    Ok(())
}

datatest_stable::harness! {
    {
        test = test_placement_case,
        root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/cases"),
        pattern = r"\.case$"
    },
}
