use grease_compose::ext::Vector3Ext;
use std::path::Path;

/// The output formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Json,
    Svg,
}

pub(crate) fn output_format(path: &Path) -> anyhow::Result<OutputFormat> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(OutputFormat::Json),
        Some("svg") => Ok(OutputFormat::Svg),
        Some(ext) => Err(anyhow::anyhow!(
            "Expected output file with extension \"json\" or \"svg\", found extension \"{ext}\", file \"{}\".",
            path.display()
        )),
        None => Err(anyhow::anyhow!(
            "Expected output file with extension \"json\" or \"svg\", no extension found for file \"{}\".",
            path.display()
        )),
    }
}

pub(crate) fn path_is_file(path: &Path) -> anyhow::Result<()> {
    if !path.is_file() {
        return Err(anyhow::anyhow!(
            "Expected file, found directory or nothing \"{}\"",
            path.display()
        ));
    }
    Ok(())
}

/// Value parser for vectors in the style `x,y,z`.
pub(crate) fn parse_vector3(s: &str) -> anyhow::Result<na::Vector3<f64>> {
    let v = na::Vector3::<f64>::parse_components(s)?;
    if !v.is_finite() {
        return Err(anyhow::anyhow!("Expected finite components, found \"{s}\""));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_formats() {
        assert_eq!(output_format(Path::new("out.json")).unwrap(), OutputFormat::Json);
        assert_eq!(output_format(Path::new("dir/out.svg")).unwrap(), OutputFormat::Svg);
        assert!(output_format(Path::new("out.png")).is_err());
        assert!(output_format(Path::new("out")).is_err());
    }

    #[test]
    fn vectors() {
        assert_eq!(parse_vector3("1,2,3").unwrap(), na::vector![1.0, 2.0, 3.0]);
        assert!(parse_vector3("1,inf,3").is_err());
    }
}
