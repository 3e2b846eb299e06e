//! Exportação das listas para CSV compatível com Excel

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Registros que podem ir para a planilha
pub trait ExcelExportable {
    /// Cabeçalhos das colunas
    fn headers() -> Vec<&'static str>;

    /// Valores da linha, na ordem dos cabeçalhos
    fn to_csv_row(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExportError {
    #[error("Nenhum dado para exportar")]
    Empty,
    #[error("Falha ao gerar o arquivo: {0}")]
    Browser(String),
}

/// Monta o CSV: BOM UTF-8, separador `;`, uma linha por registro
pub fn build_csv<T: ExcelExportable>(data: &[T]) -> Result<String, ExportError> {
    if data.is_empty() {
        return Err(ExportError::Empty);
    }

    // BOM para o Excel reconhecer acentuação
    let mut csv_content = String::from('\u{FEFF}');

    csv_content.push_str(&T::headers().join(";"));
    csv_content.push('\n');

    for item in data {
        let escaped_row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }

    Ok(csv_content)
}

/// Gera o CSV e dispara o download no navegador
pub fn export_to_excel<T: ExcelExportable>(data: &[T], filename: &str) -> Result<(), ExportError> {
    let csv_content = build_csv(data)?;
    let blob = create_csv_blob(&csv_content).map_err(ExportError::Browser)?;
    download_blob(&blob, filename).map_err(ExportError::Browser)?;
    log::info!("Exportado {} ({} linhas)", filename, data.len());
    Ok(())
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Linha(&'static str, &'static str);

    impl ExcelExportable for Linha {
        fn headers() -> Vec<&'static str> {
            vec!["Matrícula", "Nome"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn empty_data_is_an_error() {
        assert_eq!(build_csv::<Linha>(&[]), Err(ExportError::Empty));
    }

    #[test]
    fn builds_bom_header_and_rows() {
        let csv = build_csv(&[Linha("001", "Ana Silva")]).unwrap();
        assert_eq!(csv, "\u{FEFF}Matrícula;Nome\n001;Ana Silva\n");
    }

    #[test]
    fn quotes_cells_with_separators() {
        let csv = build_csv(&[Linha("002", "Costa; \"Bruno\"")]).unwrap();
        assert!(csv.ends_with("002;\"Costa; \"\"Bruno\"\"\"\n"));
    }
}
