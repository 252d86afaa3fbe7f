use crate::re;

// A line carries an item when `<description> <price>` matches as a pure
// prefix. The lazy group makes the price the earliest decimal number
// that follows whitespace.
re!(re_item_line, r"^(.*?)\s+(\d+\.\d+)");

pub(crate) fn item_line() -> &'static regex::Regex {
    re_item_line()
}

/// A logical line considered for item extraction, possibly merged from
/// several physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLine {
    /// Lower-cased text, the form all matching runs against.
    pub text: String,
    /// Original-case counterpart, kept for consumers that need case.
    pub original: String,
}

/// Continuation-merging state. `Buffering` holds non-matching lines
/// until the next matching line or end-of-input.
#[derive(Debug)]
enum State {
    Idle,
    Buffering { text: String, original: String },
}

fn flush(state: &mut State, out: &mut Vec<CandidateLine>) {
    if let State::Buffering { text, original } = std::mem::replace(state, State::Idle) {
        out.push(CandidateLine { text, original });
    }
}

/// Split the transcript into candidate item-lines.
///
/// Matching lines are emitted as-is. Runs of non-matching lines are
/// space-joined into a buffer that is flushed as its own candidate
/// immediately before the next matching line, and once more at
/// end-of-input. A description wrapped across two physical lines with
/// the price on the last one therefore surfaces as a single merged
/// candidate.
pub fn candidate_lines(transcript: &str) -> Vec<CandidateLine> {
    let lower = transcript.to_lowercase();
    let mut out = Vec::new();
    let mut state = State::Idle;

    for (line, original) in lower.lines().zip(transcript.lines()) {
        if item_line().is_match(line) {
            flush(&mut state, &mut out);
            out.push(CandidateLine {
                text: line.to_string(),
                original: original.to_string(),
            });
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        state = match state {
            State::Idle => State::Buffering {
                text: trimmed.to_string(),
                original: original.trim().to_string(),
            },
            State::Buffering { mut text, original: mut original_buf } => {
                text.push(' ');
                text.push_str(trimmed);
                original_buf.push(' ');
                original_buf.push_str(original.trim());
                State::Buffering { text, original: original_buf }
            }
        };
    }

    flush(&mut state, &mut out);
    out
}
