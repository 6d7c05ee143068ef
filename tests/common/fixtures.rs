use serde_json::{Value, json};

pub fn box_element(width: i32) -> Value {
    json!({ "type": "box", "width": width })
}

pub fn glue(width: i32, stretch: i32, shrink: i32) -> Value {
    json!({ "type": "glue", "width": width, "stretch": stretch, "shrink": shrink })
}

pub fn penalty(width: i32, penalty: i32, flagged: bool) -> Value {
    json!({ "type": "penalty", "width": width, "penalty": penalty, "flagged": flagged })
}

pub fn forced_break() -> Value {
    json!({ "type": "penalty", "width": 0, "penalty": -1000 })
}

/// Three 500-wide words with a little elasticity between them
pub fn three_words() -> Value {
    json!([
        box_element(500),
        glue(10, 5, 5),
        box_element(500),
        glue(10, 5, 5),
        box_element(500)
    ])
}

/// Two words where the second can be hyphenated; only the hyphenated
/// breaking fits a 250-wide column.
pub fn hyphenated_words() -> Value {
    json!([
        box_element(150),
        glue(20, 10, 20),
        box_element(80),
        penalty(10, 50, true),
        box_element(150),
        penalty(0, 1000, false),
        glue(0, 10_000_000, 0),
        forced_break()
    ])
}

pub fn config(line_width: i32) -> Value {
    json!({ "lineWidth": line_width })
}

pub fn forcing_config(line_width: i32) -> Value {
    json!({ "lineWidth": line_width, "force": true })
}

pub const PANGRAM: &str = "the quick brown fox jumps over the lazy dog while five boxing \
    wizards jump quickly and a wizard's job is to vex chumps quickly in fog";
