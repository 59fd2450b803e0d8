use crate::error::Error;
use crate::process::ProcessRecord;
use std::fmt;

/// The three inputs every row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Pid,
    BurstTime,
    ArrivalTime,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Pid, Field::BurstTime, Field::ArrivalTime];

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Pid => "PID",
            Field::BurstTime => "Burst Time",
            Field::ArrivalTime => "Arrival Time",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.placeholder())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessRow {
    pub pid: String,
    pub burst_time: String,
    pub arrival_time: String,
}

impl ProcessRow {
    pub fn new(pid: &str, burst_time: &str, arrival_time: &str) -> Self {
        Self {
            pid: pid.to_string(),
            burst_time: burst_time.to_string(),
            arrival_time: arrival_time.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Pid => &self.pid,
            Field::BurstTime => &self.burst_time,
            Field::ArrivalTime => &self.arrival_time,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Pid => self.pid = value,
            Field::BurstTime => self.burst_time = value,
            Field::ArrivalTime => self.arrival_time = value,
        }
    }

    /// Every field must hold a whole number written as digits with an optional
    /// leading `-`, and nothing else. `index` only locates the row in the error.
    pub fn validate(&self, index: usize) -> Result<(), Error> {
        for field in Field::ALL {
            let value = self.get(field);
            if value.trim().is_empty() {
                return Err(Error::MissingField(index + 1, field));
            }
            if !is_whole_number(value) {
                return Err(Error::NotANumber(index + 1, field, value.to_string()));
            }
        }
        Ok(())
    }

    pub fn to_record(&self) -> ProcessRecord {
        ProcessRecord {
            pid: self.pid.clone(),
            burst_time: self.burst_time.clone(),
            arrival_time: self.arrival_time.clone(),
        }
    }
}

// `i64::from_str` alone would also take a leading `+`
fn is_whole_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && value.parse::<i64>().is_ok()
}

impl From<ProcessRecord> for ProcessRow {
    fn from(record: ProcessRecord) -> Self {
        Self {
            pid: record.pid,
            burst_time: record.burst_time,
            arrival_time: record.arrival_time,
        }
    }
}

/// The row container. Rows keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct ProcessForm {
    rows: Vec<ProcessRow>,
}

impl ProcessForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self) {
        self.rows.push(ProcessRow::default());
    }

    pub fn push_row(&mut self, row: ProcessRow) {
        self.rows.push(row);
    }

    pub fn set_field(&mut self, index: usize, field: Field, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.set(field, value);
        }
    }

    pub fn remove_row(&mut self, index: usize) -> Option<ProcessRow> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn rows(&self) -> &[ProcessRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.rows
            .iter()
            .enumerate()
            .try_for_each(|(index, row)| row.validate(index))
    }

    /// One record per row, read row by row.
    pub fn records(&self) -> Vec<ProcessRecord> {
        self.rows.iter().map(ProcessRow::to_record).collect()
    }
}
