use crate::error::Error;
use crate::process::ProcessRecord;

// Parse an input file of `pid burst arrival` lines
pub fn read_file(stream: &[u8]) -> Result<Vec<ProcessRecord>, Error> {
    let string = match std::str::from_utf8(stream) {
        Ok(content) => content,
        Err(_) => return Err(Error::Utf8Error),
    };

    let mut records: Vec<ProcessRecord> = vec![];

    for (i, line) in string.lines().enumerate() {
        let line = line.trim();

        // Ignore empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields = line.split_whitespace().collect::<Vec<&str>>();
        match fields[..] {
            [pid, burst_time, arrival_time] => records.push(ProcessRecord {
                pid: pid.to_string(),
                burst_time: burst_time.to_string(),
                arrival_time: arrival_time.to_string(),
            }),
            _ => return Err(Error::MalformedLine(i + 1, line.to_string())),
        }
    }

    Ok(records)
}

/// The inverse of [`read_file`]: one `pid burst arrival` line per record.
pub fn to_input_text(records: &[ProcessRecord]) -> String {
    records
        .iter()
        .map(|p| format!("{} {} {}\n", p.pid, p.burst_time, p.arrival_time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_skipping_blanks_and_comments() {
        let records = read_file(b"# pid burst arrival\n1 5 0\n\n  2\t3  1 \n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pid, "1");
        assert_eq!(records[1].burst_time, "3");
        assert_eq!(records[1].arrival_time, "1");
    }

    #[test]
    fn rejects_wrong_field_count_with_line_number() {
        assert_eq!(
            read_file(b"1 5 0\n2 3\n").unwrap_err(),
            Error::MalformedLine(2, "2 3".to_string())
        );
        assert_eq!(
            read_file(b"1 5 0 9\n").unwrap_err(),
            Error::MalformedLine(1, "1 5 0 9".to_string())
        );
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert_eq!(read_file(&[0x31, 0x20, 0xff, 0xfe]).unwrap_err(), Error::Utf8Error);
    }

    #[test]
    fn written_text_reads_back() {
        let text = "1 5 0\n2 3 1\n";
        let records = read_file(text.as_bytes()).unwrap();
        assert_eq!(to_input_text(&records), text);
    }
}
