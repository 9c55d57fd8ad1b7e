use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG: Regex =
        Regex::new(r"<([a-z]+)>(.*?)</([a-z]+)>").expect("valid tag pattern");
}

/// A piece of a translated string. Tagged pieces are swapped for
/// components by the template that renders them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Span(String),
    Btn(String),
}

/// Splits a translated string on its `<span>` and `<btn>` tags. Unknown
/// or mismatched tags keep only their inner text.
pub fn parse(message: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = 0;

    for captures in TAG.captures_iter(message) {
        let (Some(whole), Some(open), Some(inner), Some(close)) = (
            captures.get(0),
            captures.get(1),
            captures.get(2),
            captures.get(3),
        ) else {
            continue;
        };

        push_text(&mut segments, &message[rest..whole.start()]);
        let inner = inner.as_str().to_owned();
        match (open.as_str(), close.as_str()) {
            ("span", "span") => segments.push(Segment::Span(inner)),
            ("btn", "btn") => segments.push(Segment::Btn(inner)),
            _ => push_text(&mut segments, &inner),
        }
        rest = whole.end();
    }
    push_text(&mut segments, &message[rest..]);

    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(Segment::Text(previous)) => previous.push_str(text),
        _ => segments.push(Segment::Text(text.to_owned())),
    }
}
