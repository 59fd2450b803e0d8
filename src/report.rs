//! Structured reading of the text report the scheduling server returns.
//!
//! The text is always displayed as-is; this is only used to draw a summary next
//! to it. Lines that do not match the known layout are skipped, so parsing
//! never fails.

const BEST_PREFIX: &str = "Algorithm having minimum average time is";
const QUANTUM_PREFIX: &str = "Estimated Quantum Time:";
const WAITING_PREFIX: &str = "Average Waiting Time:";
const TURNAROUND_PREFIX: &str = "Average Turnaround Time:";
const GANTT_HEADER: &str = "Gantt Chart:";

/// One bar of a Gantt chart. `task` is `None` while the CPU is idle.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttSlot {
    pub task: Option<String>,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub title: String,
    pub quantum: Option<i64>,
    pub average_waiting: Option<f64>,
    pub average_turnaround: Option<f64>,
    pub gantt: Vec<GanttSlot>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub best: Option<String>,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn parse(text: &str) -> Self {
        let mut report = Report::default();
        let mut lines = text.lines().map(str::trim).peekable();

        while let Some(line) = lines.next() {
            if let Some(best) = line.strip_prefix(BEST_PREFIX) {
                report.best = Some(best.trim().to_string());
            } else if line.contains("Scheduling") && line.ends_with(':') {
                report.sections.push(Section {
                    title: line.trim_end_matches(':').to_string(),
                    ..Section::default()
                });
            } else if let Some(section) = report.sections.last_mut() {
                if let Some(value) = line.strip_prefix(QUANTUM_PREFIX) {
                    section.quantum = value.trim().parse().ok();
                } else if let Some(value) = line.strip_prefix(WAITING_PREFIX) {
                    section.average_waiting = value.trim().parse().ok();
                } else if let Some(value) = line.strip_prefix(TURNAROUND_PREFIX) {
                    section.average_turnaround = value.trim().parse().ok();
                } else if line == GANTT_HEADER {
                    let bars = lines.next_if(|next| next.starts_with('|'));
                    let times = bars.and_then(|_| lines.next());
                    if let (Some(bars), Some(times)) = (bars, times) {
                        section.gantt = parse_gantt(bars, times);
                    }
                }
            }
        }

        report
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_none() && self.sections.is_empty()
    }
}

// "|  T1   |       |  T2   |" over "0\t3\t5\t9"
fn parse_gantt(bars: &str, times: &str) -> Vec<GanttSlot> {
    let labels = bars.split('|').collect::<Vec<&str>>();
    if labels.len() < 3 {
        return vec![];
    }
    let labels = &labels[1..labels.len() - 1];

    let times = match times
        .split_whitespace()
        .map(str::parse::<i64>)
        .collect::<Result<Vec<i64>, _>>()
    {
        Ok(times) => times,
        Err(_) => return vec![],
    };

    if times.len() != labels.len() + 1 {
        log::debug!(
            "gantt chart has {} bars but {} time marks",
            labels.len(),
            times.len()
        );
        return vec![];
    }

    labels
        .iter()
        .zip(times.windows(2))
        .map(|(label, window)| {
            let label = label.trim();
            GanttSlot {
                task: (!label.is_empty()).then(|| label.to_string()),
                start: window[0],
                end: window[1],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Algorithm having minimum average time is SRTF

Round Robin Scheduling (Dynamic Quantum):
Estimated Quantum Time: 4
Average Waiting Time: 2.5
Average Turnaround Time: 6
Gantt Chart:
|  T1   |       |  T2   |
0\t3\t5\t9

FCFS Scheduling:
Average Waiting Time: 0
Average Turnaround Time: 3.5
Gantt Chart:
|  T1   |  T2   |
0\t3\t7

";

    #[test]
    fn parses_best_and_sections() {
        let report = Report::parse(SAMPLE);

        assert_eq!(report.best.as_deref(), Some("SRTF"));
        assert_eq!(report.sections.len(), 2);

        let rr = &report.sections[0];
        assert_eq!(rr.title, "Round Robin Scheduling (Dynamic Quantum)");
        assert_eq!(rr.quantum, Some(4));
        assert_eq!(rr.average_waiting, Some(2.5));
        assert_eq!(rr.average_turnaround, Some(6.0));

        let fcfs = &report.sections[1];
        assert_eq!(fcfs.title, "FCFS Scheduling");
        assert_eq!(fcfs.quantum, None);
        assert_eq!(fcfs.gantt.len(), 2);
    }

    #[test]
    fn idle_gaps_have_no_task() {
        let report = Report::parse(SAMPLE);
        assert_eq!(
            report.sections[0].gantt,
            vec![
                GanttSlot { task: Some("T1".to_string()), start: 0, end: 3 },
                GanttSlot { task: None, start: 3, end: 5 },
                GanttSlot { task: Some("T2".to_string()), start: 5, end: 9 },
            ]
        );
    }

    #[test]
    fn mismatched_time_marks_drop_the_chart() {
        let report = Report::parse("FCFS Scheduling:\nGantt Chart:\n|  T1   |\n0\n");
        assert_eq!(report.sections.len(), 1);
        assert!(report.sections[0].gantt.is_empty());
    }

    #[test]
    fn free_text_is_an_empty_report() {
        assert!(Report::parse("5.00").is_empty());
        assert!(Report::parse("No tasks found in input file\n").is_empty());
        assert!(Report::parse("").is_empty());
    }
}
