use crate::io::output::{OutputWriter, Report};
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tlx::NasaTlxResponse;

    #[test]
    fn test_writes_pretty_json_with_nulls() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_report(&Report::Tlx(vec![NasaTlxResponse::default().score()]))
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(value[0]["rawTlx"].is_null());
        assert_eq!(value[0]["answered"], 0);
        assert!(String::from_utf8(buf).unwrap().ends_with("]\n"));
    }
}
