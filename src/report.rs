use crate::runner::ScanOutcome;

/// Render the final results block exactly as it is printed.
///
/// Entries appear in the order they were collected, which is completion
/// order, not input order.
pub fn render_report(results: &[ScanOutcome]) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str("=========== RESULTADOS FINALES ===========\n");
    for entry in results {
        out.push_str(&format!("{}: {}\n", entry.label, entry.status));
    }
    out.push_str("==========================================\n");
    out
}

pub fn print_report(results: &[ScanOutcome]) {
    print!("{}", render_report(results));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::ScanStatus;

    fn outcome(label: &str, status: ScanStatus) -> ScanOutcome {
        ScanOutcome {
            label: label.to_string(),
            status,
        }
    }

    #[test]
    fn one_line_per_result_between_the_banners() {
        let results = vec![
            outcome("Feliz", ScanStatus::FaceDetected),
            outcome("Enojado", ScanStatus::LoadError),
            outcome("Triste", ScanStatus::NoFace),
        ];

        let rendered = render_report(&results);
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "=========== RESULTADOS FINALES ===========");
        assert_eq!(lines[2], "Feliz: ROSTRO DETECTADO");
        assert_eq!(lines[3], "Enojado: ERROR: Imagen no encontrada");
        assert_eq!(lines[4], "Triste: SIN ROSTRO DETECTADO");
        assert_eq!(lines[5], "==========================================");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn empty_results_still_print_the_banners() {
        let rendered = render_report(&[]);
        assert_eq!(rendered.lines().count(), 3);
    }
}
