use crate::Result;
use std::io::Write;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Format {
    CSV,
    JSON,
    #[default]
    PIPE,
}

impl From<&Format> for u8 {
    fn from(f: &Format) -> Self {
        match f {
            Format::CSV => b',',
            Format::PIPE => b'|',
            Format::JSON => 0,
        }
    }
}

/// A row to be displayed. Column order is the output order.
pub struct DisplayBody {
    pub columns: Vec<Column>,
}

impl DisplayBody {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

pub struct Column {
    pub name: String,
    pub value: String,
}

impl Column {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    // JSON keys are the lower-cased column names.
    fn json_key(&self) -> String {
        self.name.to_lowercase()
    }
}

pub fn print<W: Write, D: Into<DisplayBody>>(
    w: &mut W,
    data: Vec<D>,
    no_headers: bool,
    format: &Format,
) -> Result<()> {
    let rows: Vec<DisplayBody> = data.into_iter().map(Into::into).collect();
    if rows.is_empty() {
        return Ok(());
    }
    match format {
        Format::JSON => {
            for row in rows {
                let object: serde_json::Map<String, serde_json::Value> = row
                    .columns
                    .into_iter()
                    .map(|column| (column.json_key(), serde_json::Value::String(column.value)))
                    .collect();
                writeln!(w, "{}", serde_json::to_string(&object)?)?;
            }
        }
        _ => {
            let mut wtr = csv::WriterBuilder::new()
                .delimiter(format.into())
                .from_writer(w);
            if !no_headers {
                let headers = rows[0]
                    .columns
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect::<Vec<_>>();
                wtr.write_record(&headers)?;
            }
            for row in rows {
                wtr.write_record(row.columns.iter().map(|c| c.value.as_str()))?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}
