use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context as _;

use crate::descriptor::model::{SourceEntry, VirtualDescriptor};
use crate::foundation::error::MosaicResult;

impl VirtualDescriptor {
    /// Serialize to GDAL VRT XML.
    ///
    /// The output is byte-stable for identical descriptors: fixed two-space
    /// indent, fixed attribute order, entries in composition order.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "<VRTDataset rasterXSize=\"{}\" rasterYSize=\"{}\">",
            self.width(),
            self.height()
        );

        for (idx, entries) in self.bands().iter().enumerate() {
            let _ = writeln!(
                out,
                "  <VRTRasterBand dataType=\"{}\" band=\"{}\">",
                self.pixel_type().gdal_name(),
                idx + 1
            );
            if self.gray() {
                out.push_str("    <ColorInterp>Gray</ColorInterp>\n");
            }
            for entry in entries {
                write_source(&mut out, entry);
            }
            out.push_str("  </VRTRasterBand>\n");
        }

        out.push_str("</VRTDataset>\n");
        out
    }

    /// Write the serialized descriptor to `path`, creating parent
    /// directories as needed.
    pub fn write_to(&self, path: &Path) -> MosaicResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("create descriptor directory '{}'", parent.display())
                })?;
            }
        }
        std::fs::write(path, self.to_xml())
            .with_context(|| format!("write descriptor '{}'", path.display()))?;
        Ok(())
    }
}

fn write_source(out: &mut String, entry: &SourceEntry) {
    out.push_str("    <SimpleSource>\n");
    let _ = writeln!(
        out,
        "      <SourceFilename relativeToVRT=\"{}\">{}</SourceFilename>",
        u8::from(entry.relative_to_descriptor),
        xml_escape(&entry.source_file)
    );
    let _ = writeln!(out, "      <SourceBand>{}</SourceBand>", entry.source_band);
    let _ = writeln!(
        out,
        "      <SrcRect xOff=\"{}\" yOff=\"{}\" xSize=\"{}\" ySize=\"{}\"/>",
        entry.src_rect.x, entry.src_rect.y, entry.src_rect.w, entry.src_rect.h
    );
    let _ = writeln!(
        out,
        "      <DstRect xOff=\"{}\" yOff=\"{}\" xSize=\"{}\" ySize=\"{}\"/>",
        entry.dst_rect.x, entry.dst_rect.y, entry.dst_rect.w, entry.dst_rect.h
    );
    out.push_str("    </SimpleSource>\n");
}

/// Escape the five XML-special characters in text content.
fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/descriptor/xml.rs"]
mod tests;
