//! Interactive trip planning prompt.
//!
//! Reads station ids and a departure time, prints a trip summary and keeps
//! the rider's fare session between trips so the transfer window applies
//! across rides. Generic over its input and output so it can be driven from
//! tests.

mod summary;

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::domain::{MinuteOfDay, StationId};
use crate::fare::{FareRules, FareSession};
use crate::network::{Network, NetworkError};
use crate::planner::{TripQuery, plan_trip};

pub use summary::{render_plan, render_station_list};

/// Errors that end an interactive session.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The network is inconsistent with a path it produced
    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// Line-oriented prompt over arbitrary input and output.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    /// Create a prompt.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a question and read one trimmed line. `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer is a known station id.
    fn ask_station(
        &mut self,
        question: &str,
        network: &Network,
    ) -> Result<Option<StationId>, PromptError> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match StationId::parse_normalized(&answer) {
                Ok(id) if network.contains(&id) => return Ok(Some(id)),
                _ => writeln!(
                    self.output,
                    "Invalid station ID. Please try again (example: {}).",
                    example_ids(network)
                )?,
            }
        }
    }

    /// Ask until the answer is a valid "HH:MM" time.
    fn ask_time(&mut self, question: &str) -> Result<Option<MinuteOfDay>, PromptError> {
        loop {
            let Some(answer) = self.ask(question)? else {
                return Ok(None);
            };
            match MinuteOfDay::parse_hhmm(&answer) {
                Ok(time) => return Ok(Some(time)),
                Err(e) => writeln!(self.output, "{e}. Please use HH:MM (e.g. 16:34).")?,
            }
        }
    }

    /// Run the trip loop until the rider declines another trip or input
    /// ends. Returns the final fare session.
    pub fn run(
        &mut self,
        network: &Network,
        rules: &FareRules,
        mut session: FareSession,
    ) -> Result<FareSession, PromptError> {
        loop {
            write!(self.output, "{}", render_station_list(network))?;

            let Some(from) = self.ask_station("\nEnter departure station ID: ", network)? else {
                break;
            };
            let Some(to) = self.ask_station("Enter destination station ID: ", network)? else {
                break;
            };
            let Some(depart_at) = self.ask_time("Enter trip start time (HH:MM): ")? else {
                break;
            };

            let plan = plan_trip(network, rules, TripQuery::new(from, to, depart_at), session)
                .inspect_err(|e| warn!(error = %e, "Trip planning failed"))?;
            session = plan.session;

            write!(self.output, "{}", render_plan(network, rules, &plan))?;

            let again = self.ask("\nPlan another trip? (y/n): ")?;
            if !again.is_some_and(|a| a.eq_ignore_ascii_case("y")) {
                break;
            }
        }

        writeln!(self.output, "\nGoodbye!")?;
        Ok(session)
    }
}

/// A few station ids to show in retry messages.
fn example_ids(network: &Network) -> String {
    network
        .stations()
        .take(3)
        .map(|s| s.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Money, Station};
    use crate::fare::ZoneFareTable;
    use crate::network::Link;
    use std::io::Cursor;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn fixture() -> (Network, FareRules) {
        let network = Network::new(
            vec![
                Station::new(id("WFR"), "Waterfront", 1),
                Station::new(id("CMB"), "Commercial-Broadway", 2),
                Station::new(id("UBC"), "UBC Exchange", 2),
            ],
            vec![
                Link::new(id("WFR"), id("CMB"), 14, "Expo", "train"),
                Link::new(id("CMB"), id("UBC"), 30, "99 B-Line", "bus"),
            ],
        )
        .unwrap();
        let table = ZoneFareTable::new([
            (1, Money::from_cents(250)),
            (2, Money::from_cents(375)),
            (3, Money::from_cents(490)),
        ])
        .unwrap();
        (network, FareRules::new(table, Money::from_cents(200)))
    }

    fn run(input: &str) -> (String, FareSession) {
        let (network, rules) = fixture();
        let mut prompt = Prompt::new(Cursor::new(input.to_string()), Vec::new());
        let session = prompt
            .run(&network, &rules, FareSession::Inactive)
            .unwrap();
        (String::from_utf8(prompt.into_output()).unwrap(), session)
    }

    #[test]
    fn session_carries_across_trips() {
        let (out, session) = run("ubc\ncmb\n9:00\ny\nwfr\ncmb\n9:20\nn\n");

        assert!(out.contains("Charged now: $2.00"));
        assert!(out.contains("Charged now: $1.25"));
        assert!(out.ends_with("\nGoodbye!\n"));
        assert_eq!(
            session,
            FareSession::Active {
                start_minute: 540,
                paid_zones: 2
            }
        );
    }

    #[test]
    fn retries_on_bad_station_and_time() {
        let (out, _) = run("XYZ\nWFR\nCMB\n25:00\nnoon\n10:00\nn\n");

        assert!(out.contains("Invalid station ID. Please try again (example: CMB, UBC, WFR)."));
        assert!(out.contains("invalid time: hour must be 0-23. Please use HH:MM"));
        assert!(out.contains("invalid time: expected HH:MM format. Please use HH:MM"));
        assert!(out.contains("Charged now: $3.75"));
    }

    #[test]
    fn same_station_leaves_session_alone() {
        let (out, session) = run("CMB\ncmb\n9:00\nn\n");
        assert!(out.contains("No travel - same origin and destination."));
        assert_eq!(session, FareSession::Inactive);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (out, session) = run("WFR\n");
        assert!(out.ends_with("\nGoodbye!\n"));
        assert_eq!(session, FareSession::Inactive);
    }
}
