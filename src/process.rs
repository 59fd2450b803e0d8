use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One process as typed by the user. Values stay strings, the server parses them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProcessRecord {
    pub pid: String,
    pub burst_time: String,
    pub arrival_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleRequest {
    pub processes: Vec<ProcessRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScheduleResponse {
    pub result: String,
    // algorithm name -> chart image path on the server
    #[serde(default)]
    pub gantt_charts: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_wire_shape() {
        let request = ScheduleRequest {
            processes: vec![ProcessRecord {
                pid: "1".to_string(),
                burst_time: "5".to_string(),
                arrival_time: "0".to_string(),
            }],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"processes":[{"pid":"1","burst_time":"5","arrival_time":"0"}]}"#
        );
    }

    #[test]
    fn empty_request_has_empty_array() {
        let request = ScheduleRequest { processes: vec![] };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"processes":[]}"#);
    }

    #[test]
    fn response_without_charts() {
        let response: ScheduleResponse = serde_json::from_str(r#"{"result":"5.00"}"#).unwrap();
        assert_eq!(response.result, "5.00");
        assert!(response.gantt_charts.is_empty());
    }

    #[test]
    fn response_with_charts() {
        let response: ScheduleResponse = serde_json::from_str(
            r#"{"result":"ok","gantt_charts":{"fcfs":"static/gantt_chart_fcfs.png"}}"#,
        )
        .unwrap();
        assert_eq!(response.gantt_charts["fcfs"], "static/gantt_chart_fcfs.png");
    }
}
