use crate::domain::property::Property;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

const HEADERS: [&str; 13] = [
    "ID",
    "Title",
    "Location",
    "Type",
    "Bedrooms",
    "Bathrooms",
    "Area (m²)",
    "Price",
    "Currency",
    "UF",
    "CLP",
    "Owner",
    "Owner Phone",
];

/// Whole catalog, private owner columns included. Admin only.
pub fn export_catalog_xlsx(properties: &[Property], date: &str) -> ResultResp {
    let buffer = build_workbook(properties).map_err(|e| {
        ServerError::XlsxError(format!("Failed to build catalog workbook: {e}"))
    })?;

    xlsx_response(buffer, &format!("catalog_{date}.xlsx"))
}

fn build_workbook(properties: &[Property]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (i, property) in properties.iter().enumerate() {
        write_row(worksheet, (i + 1) as u32, property)?;
    }

    workbook.save_to_buffer()
}

fn write_row(ws: &mut Worksheet, r: u32, p: &Property) -> Result<(), XlsxError> {
    let valuation = crate::domain::pricing::normalize(p.price, &p.currency);
    let (owner, phone) = p
        .private_data
        .as_ref()
        .map(|d| (d.owner_name.as_str(), d.owner_phone.as_str()))
        .unwrap_or(("", ""));

    ws.write_string(r, 0, &p.id)?;
    ws.write_string(r, 1, &p.title)?;
    ws.write_string(r, 2, &p.location)?;
    ws.write_string(r, 3, p.property_type.label())?;
    ws.write_number(r, 4, p.bedrooms as f64)?;
    ws.write_number(r, 5, p.bathrooms as f64)?;
    ws.write_number(r, 6, p.area)?;
    ws.write_number(r, 7, p.price)?;
    ws.write_string(r, 8, &p.currency)?;
    ws.write_number(r, 9, valuation.uf.round())?;
    ws.write_number(r, 10, valuation.clp)?;
    ws.write_string(r, 11, owner)?;
    ws.write_string(r, 12, phone)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::seed_properties;

    #[test]
    fn workbook_is_a_zip_archive() {
        let buffer = build_workbook(&seed_properties()).unwrap();
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn export_response_is_an_attachment() {
        let resp = export_catalog_xlsx(&seed_properties(), "2026-10-18").unwrap();
        assert_eq!(resp.status(), 200);
        let disposition = resp
            .headers()
            .get("Content-Disposition")
            .unwrap()
            .to_str()
            .unwrap();
        assert_eq!(disposition, "attachment; filename=\"catalog_2026-10-18.xlsx\"");
    }
}
