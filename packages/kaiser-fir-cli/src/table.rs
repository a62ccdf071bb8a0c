use std::io::Read;
use std::path::Path;

/// In-memory CSV table with a header row
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Read a CSV file. Every row must have as many fields as the header.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|e| format!("Failed to open '{}': {}", path.display(), e))?;
        Self::from_reader(file).map_err(|e| format!("{}: {}", path.display(), e))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, String> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| format!("Failed to read CSV header: {}", e))?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| format!("Invalid CSV row {}: {}", index + 1, e))?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Parse a named column as numbers
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, String> {
        let index = self
            .column_index(name)
            .ok_or_else(|| format!("Column '{}' not found (available: {})", name, self.headers.join(", ")))?;

        self.rows
            .iter()
            .enumerate()
            .map(|(row, fields)| {
                let cell = &fields[index];
                cell.parse::<f64>().map_err(|_| {
                    format!(
                        "Column '{}' row {}: '{}' is not a number",
                        name,
                        row + 1,
                        cell
                    )
                })
            })
            .collect()
    }

    /// Set a column, replacing it if the name already exists.
    /// `values` must have one entry per row.
    pub fn set_column(&mut self, name: &str, values: &[f64]) -> Result<(), String> {
        if values.len() != self.rows.len() {
            return Err(format!(
                "Column '{}' has {} values but the table has {} rows",
                name,
                values.len(),
                self.rows.len()
            ));
        }

        match self.column_index(name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[index] = value.to_string();
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value.to_string());
                }
            }
        }
        Ok(())
    }

    pub fn to_csv_string(&self) -> Result<String, String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(&self.headers)
            .map_err(|e| format!("Failed to write CSV header: {}", e))?;
        for row in &self.rows {
            writer
                .write_record(row)
                .map_err(|e| format!("Failed to write CSV row: {}", e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| format!("Failed to flush CSV output: {}", e))?;
        String::from_utf8(bytes).map_err(|e| format!("CSV output is not UTF-8: {}", e))
    }
}
