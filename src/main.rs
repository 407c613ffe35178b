//! Command-line entry point: one boxed Q&A exchange per invocation.
//!
//! The model is an external collaborator. Its streamed output is read from
//! stdin (pipe it in), or replayed from a canned script with `--demo`.

use chatterbox::{from_reader, scripted, ChatSession, RenderStrategy, TerminalSink, TtyProbe};
use std::env;
use std::io::{self, IsTerminal};
use std::time::Duration;

/// Reply used by `--demo` when no model stream is attached.
const DEMO_REPLY: &str = "Chatterbox draws one boxed exchange per invocation: \
your prompt in a framed panel near the top, and this streamed reply in a wide \
panel anchored to the bottom of the terminal.\n\nEvery fragment re-wraps and \
redraws the whole frame, so resizing the terminal mid-stream just works, and \
replies longer than the screen grow the frame instead of being cut off.";

fn usage() {
    eprintln!("usage: chatterbox [--demo] [--append] <prompt>");
    eprintln!();
    eprintln!("The response stream is read from stdin, e.g.:");
    eprintln!("  some-model \"question\" | chatterbox \"question\"");
}

fn main() {
    let mut strategy = RenderStrategy::ClearRedraw;
    let mut demo = false;
    let mut words: Vec<String> = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--append" => strategy = RenderStrategy::IncrementalAppend,
            "--demo" => demo = true,
            _ => words.push(arg),
        }
    }
    if words.is_empty() {
        usage();
        return;
    }
    let question = words.join(" ");

    let stream = if demo {
        scripted(DEMO_REPLY, Duration::from_millis(40))
    } else if io::stdin().is_terminal() {
        eprintln!("Error: no model stream on stdin. Pipe a model's output, or pass --demo.");
        return;
    } else {
        from_reader(io::stdin())
    };

    let sink = TerminalSink::new(io::stdout(), strategy);
    let mut session = ChatSession::new(sink, TtyProbe);
    if let Err(err) = session.run(&question, stream) {
        eprintln!("Error: {err}");
    }
}
