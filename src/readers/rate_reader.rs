use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{PricingError, Result};
use crate::models::{ContainerRate, ContainerSize, ProductVolume};
use crate::table::{builtin, RateTable, TableSource};

/// One row of a rates file. Extra columns such as a stored price per m3 or a
/// product type are ignored.
#[derive(Debug, Deserialize)]
struct RateRow {
    #[serde(rename = "Port")]
    port: String,
    #[serde(rename = "Container Size")]
    container_size: String,
    #[serde(rename = "Volume (m3)")]
    volume_m3: f64,
    #[serde(rename = "Price", alias = "Price (NZD)")]
    price: f64,
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(rename = "Product Type")]
    product_type: String,
    #[serde(rename = "Volume (m3)")]
    volume_m3: f64,
}

/// Loads a [`RateTable`] from CSV files.
pub struct RateTableReader {
    delimiter: u8,
}

impl RateTableReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Load rates from `rates_path` and product volumes from `products_path`,
    /// or from the embedded product catalogue when no products file is given.
    ///
    /// Any failure is reported as [`PricingError::DataUnavailable`] naming the
    /// offending file; no partial table is ever returned.
    pub fn load(&self, rates_path: &Path, products_path: Option<&Path>) -> Result<RateTable> {
        let rates = self
            .read_rates_file(rates_path)
            .map_err(|e| unavailable(rates_path, e))?;

        let products = match products_path {
            Some(path) => self
                .read_products_file(path)
                .map_err(|e| unavailable(path, e))?,
            None => builtin::product_volumes(),
        };

        let source = TableSource::File {
            rates: rates_path.to_path_buf(),
            products: products_path.map(Path::to_path_buf),
        };
        let table =
            RateTable::new(rates, products, source).map_err(|e| unavailable(rates_path, e))?;

        info!(
            "Loaded {} container rates and {} product volumes from {}",
            table.rates().len(),
            table.products().len(),
            rates_path.display()
        );
        Ok(table)
    }

    pub fn read_rates_file(&self, path: &Path) -> Result<Vec<ContainerRate>> {
        let file = File::open(path)?;
        self.read_rates(file)
    }

    pub fn read_products_file(&self, path: &Path) -> Result<Vec<ProductVolume>> {
        let file = File::open(path)?;
        self.read_products(file)
    }

    /// Parse container rates from CSV with a header row.
    pub fn read_rates<R: Read>(&self, reader: R) -> Result<Vec<ContainerRate>> {
        let mut csv_reader = self.csv_reader(reader);
        let mut rates = Vec::new();

        for row in csv_reader.deserialize::<RateRow>() {
            let row = row?;
            let container_size = row.container_size.parse::<ContainerSize>().map_err(|_| {
                PricingError::InvalidData(format!(
                    "unknown container size '{}' for port {}",
                    row.container_size, row.port
                ))
            })?;
            let rate = ContainerRate::new(row.port, container_size, row.volume_m3, row.price);
            rate.validate_values()?;
            rates.push(rate);
        }

        debug!("Parsed {} container rate rows", rates.len());
        Ok(rates)
    }

    /// Parse product volumes from CSV with a header row.
    pub fn read_products<R: Read>(&self, reader: R) -> Result<Vec<ProductVolume>> {
        let mut csv_reader = self.csv_reader(reader);
        let mut products = Vec::new();

        for row in csv_reader.deserialize::<ProductRow>() {
            let row = row?;
            let product = ProductVolume::new(row.product_type, row.volume_m3);
            product.validate_values()?;
            products.push(product);
        }

        debug!("Parsed {} product volume rows", products.len());
        Ok(products)
    }

    fn csv_reader<R: Read>(&self, reader: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::All)
            .has_headers(true)
            .from_reader(reader)
    }
}

impl Default for RateTableReader {
    fn default() -> Self {
        Self::new()
    }
}

fn unavailable(path: &Path, err: PricingError) -> PricingError {
    let reason = match &err {
        PricingError::Io(io_err) if io_err.kind() == io::ErrorKind::NotFound => {
            "file not found".to_string()
        }
        PricingError::InvalidData(message) => message.clone(),
        other => other.to_string(),
    };
    PricingError::DataUnavailable {
        path: path.to_path_buf(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const RATES_CSV: &str = "\
Port,Container Size,Volume (m3),Price (NZD),Price per m3 (NZD),Product Type
Fuzhou FZG,20GP,28,5379.19,999.99,Dawn Sofa
Fuzhou FZG,40HC,68,9706.88,142.75,Dining Table
Jiujiang JIU,20GP,28,5443.26,194.40,
";

    #[test]
    fn test_read_rates_ignores_stored_price_per_m3() {
        let reader = RateTableReader::new();
        let rates = reader.read_rates(RATES_CSV.as_bytes()).unwrap();

        assert_eq!(rates.len(), 3);
        assert_eq!(rates[0].port, "Fuzhou FZG");
        assert_eq!(rates[0].container_size, ContainerSize::Gp20);
        assert_eq!(rates[0].price, 5379.19);
        assert!((rates[0].price_per_m3() - 192.1139).abs() < 0.0001);
        assert_eq!(rates[2].port, "Jiujiang JIU");
    }

    #[test]
    fn test_read_rates_plain_price_header_and_whitespace() {
        let csv = "Port , Container Size , Volume (m3) , Price\n Ningbo NBG , 40hc , 68 , 9178.69 \n";
        let rates = RateTableReader::new().read_rates(csv.as_bytes()).unwrap();
        assert_eq!(rates.len(), 1);
        assert_eq!(rates[0].port, "Ningbo NBG");
        assert_eq!(rates[0].container_size, ContainerSize::Hc40);
    }

    #[test]
    fn test_read_rates_rejects_bad_rows() {
        let reader = RateTableReader::new();

        let unknown_size = "Port,Container Size,Volume (m3),Price\nFuzhou FZG,30XX,28,100\n";
        assert!(reader.read_rates(unknown_size.as_bytes()).is_err());

        let zero_volume = "Port,Container Size,Volume (m3),Price\nFuzhou FZG,20GP,0,100\n";
        assert!(reader.read_rates(zero_volume.as_bytes()).is_err());

        let not_a_number = "Port,Container Size,Volume (m3),Price\nFuzhou FZG,20GP,28,abc\n";
        assert!(reader.read_rates(not_a_number.as_bytes()).is_err());
    }

    #[test]
    fn test_semicolon_delimiter() {
        let csv = "Port;Container Size;Volume (m3);Price\nXiamen XMG;20GP;28;4892.07\n";
        let rates = RateTableReader::with_delimiter(b';')
            .read_rates(csv.as_bytes())
            .unwrap();
        assert_eq!(rates[0].price, 4892.07);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let reader = RateTableReader::new();
        let err = reader
            .load(Path::new("does/not/exist.csv"), None)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DataUnavailable);
        let message = err.to_string();
        assert!(message.contains("does/not/exist.csv"));
        assert!(message.contains("file not found"));
    }

    #[test]
    fn test_load_from_files() -> Result<()> {
        let mut rates_file = NamedTempFile::new()?;
        write!(rates_file, "{}", RATES_CSV)?;

        let mut products_file = NamedTempFile::new()?;
        writeln!(products_file, "Product Type,Volume (m3)")?;
        writeln!(products_file, "Dawn Sofa,2.5")?;
        writeln!(products_file, "Side Table,0.3")?;

        let table = RateTableReader::new().load(rates_file.path(), Some(products_file.path()))?;

        assert_eq!(table.rates().len(), 3);
        assert_eq!(table.product_types(), vec!["Dawn Sofa", "Side Table"]);
        assert!(table.lookup_product_volume("Hudson Mug").is_err());
        assert!(matches!(table.source(), TableSource::File { .. }));

        Ok(())
    }

    #[test]
    fn test_load_uses_builtin_products_without_products_file() -> Result<()> {
        let mut rates_file = NamedTempFile::new()?;
        write!(rates_file, "{}", RATES_CSV)?;

        let table = RateTableReader::new().load(rates_file.path(), None)?;
        assert_eq!(table.lookup_product_volume("Hudson Mug")?, 0.00145935);

        Ok(())
    }

    #[test]
    fn test_load_rejects_duplicates_and_empty_files() -> Result<()> {
        let mut duplicate = NamedTempFile::new()?;
        writeln!(duplicate, "Port,Container Size,Volume (m3),Price")?;
        writeln!(duplicate, "Fuzhou FZG,20GP,28,5379.19")?;
        writeln!(duplicate, "Fuzhou FZG,20GP,28,4000.00")?;

        let err = RateTableReader::new()
            .load(duplicate.path(), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataUnavailable);
        assert!(err.to_string().contains("duplicate"));

        let mut empty = NamedTempFile::new()?;
        writeln!(empty, "Port,Container Size,Volume (m3),Price")?;
        let err = RateTableReader::new().load(empty.path(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataUnavailable);

        Ok(())
    }
}
