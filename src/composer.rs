//! Turns ordered record lists into finished documents.

use crate::config::SheetConfig;
use crate::error::SheetError;
use crate::plans::{COF_MINI_PLAN, DND_PLAN, Plan, SWN_PLAN, TIMOTHEE_PLAN};
use battlesheet_render_core::{Canvas, DocumentRenderer, FlowCanvas, Recording, RecordingRenderer};
use battlesheet_render_lopdf::LopdfRenderer;
use battlesheet_types::{CofCreature, CreatureRecord, DndCreature, GameSystem, SwnCreature};
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

/// Renders creature records with a fixed page setup and theme.
///
/// Each build owns its canvas, so separate builds share nothing and can run
/// on different threads.
#[derive(Debug, Clone, Default)]
pub struct SheetComposer {
    config: SheetConfig,
}

impl SheetComposer {
    pub fn new(config: SheetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Draws one page per record with `plan`, in order, and finishes the
    /// document on `renderer`.
    pub fn compose<'r, R, D>(
        &self,
        plan: &Plan<R>,
        records: impl IntoIterator<Item = &'r R>,
        renderer: D,
    ) -> Result<D::Output, SheetError>
    where
        R: 'static,
        D: DocumentRenderer,
    {
        let theme = &self.config.theme;
        let mut canvas = FlowCanvas::new(renderer, self.config.page);

        let mut count = 0;
        for record in records {
            plan.render(&mut canvas, theme, record);
            count += 1;
        }
        info!(
            "Rendered {} {} card(s) on {} page(s)",
            count,
            plan.system,
            canvas.page_count()
        );
        Ok(canvas.finish()?)
    }

    /// Renders schema-tagged records for `system`.
    ///
    /// Every record is checked against the system's schema before anything is
    /// drawn; the first record of another schema aborts the build.
    pub fn render_records<D: DocumentRenderer>(
        &self,
        system: GameSystem,
        records: &[CreatureRecord],
        renderer: D,
    ) -> Result<D::Output, SheetError> {
        if let Some(index) = records.iter().position(|record| !record.fits(system)) {
            return Err(SheetError::SchemaMismatch { system, index });
        }

        match system {
            GameSystem::Dnd => self.compose(&DND_PLAN, records.iter().filter_map(as_dnd), renderer),
            GameSystem::Swn => self.compose(&SWN_PLAN, records.iter().filter_map(as_swn), renderer),
            GameSystem::CofMini => self.compose(&COF_MINI_PLAN, records.iter().filter_map(as_cof), renderer),
            GameSystem::Timothee => self.compose(&TIMOTHEE_PLAN, records.iter().filter_map(as_cof), renderer),
        }
    }

    /// Renders a PDF document into `writer` and hands the writer back.
    pub fn render_pdf<W: Write + Seek>(
        &self,
        system: GameSystem,
        records: &[CreatureRecord],
        writer: W,
    ) -> Result<W, SheetError> {
        self.render_records(system, records, LopdfRenderer::new(writer))
    }

    /// Renders a PDF document to `path`, creating missing parent directories.
    pub fn render_to_file(
        &self,
        system: GameSystem,
        records: &[CreatureRecord],
        path: impl AsRef<Path>,
    ) -> Result<(), SheetError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let writer = self.render_pdf(system, records, BufWriter::new(File::create(path)?))?;
        writer.into_inner().map_err(|e| e.into_error())?;
        info!("Wrote {}", path.display());
        Ok(())
    }

    /// Lays the records out without producing a file.
    pub fn dry_run(&self, system: GameSystem, records: &[CreatureRecord]) -> Result<Recording, SheetError> {
        self.render_records(system, records, RecordingRenderer::new())
    }
}

fn as_dnd(record: &CreatureRecord) -> Option<&DndCreature> {
    match record {
        CreatureRecord::Dnd(creature) => Some(creature),
        _ => None,
    }
}

fn as_swn(record: &CreatureRecord) -> Option<&SwnCreature> {
    match record {
        CreatureRecord::Swn(creature) => Some(creature),
        _ => None,
    }
}

fn as_cof(record: &CreatureRecord) -> Option<&CofCreature> {
    match record {
        CreatureRecord::Cof(creature) => Some(creature),
        _ => None,
    }
}

/// Renders D&D cards as a PDF with the default look.
pub fn render_dnd_sheets<W: Write + Seek>(records: &[DndCreature], writer: W) -> Result<W, SheetError> {
    SheetComposer::default().compose(&DND_PLAN, records, LopdfRenderer::new(writer))
}

/// Renders SWN cards as a PDF with the default look.
pub fn render_swn_sheets<W: Write + Seek>(records: &[SwnCreature], writer: W) -> Result<W, SheetError> {
    SheetComposer::default().compose(&SWN_PLAN, records, LopdfRenderer::new(writer))
}

/// Renders COF Mini cards as a PDF with the default look.
pub fn render_cofmini_sheets<W: Write + Seek>(records: &[CofCreature], writer: W) -> Result<W, SheetError> {
    SheetComposer::default().compose(&COF_MINI_PLAN, records, LopdfRenderer::new(writer))
}

/// Renders Timothée cards as a PDF with the default look.
pub fn render_timothee_sheets<W: Write + Seek>(records: &[CofCreature], writer: W) -> Result<W, SheetError> {
    SheetComposer::default().compose(&TIMOTHEE_PLAN, records, LopdfRenderer::new(writer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(system: GameSystem, values: Vec<serde_json::Value>) -> Vec<CreatureRecord> {
        values
            .into_iter()
            .map(|value| system.parse_record(value).unwrap())
            .collect()
    }

    #[test]
    fn one_page_per_record() {
        let records = records(
            GameSystem::Dnd,
            vec![json!({"name": "Gobelin"}), json!({"name": "Orc"}), json!({"name": "Kobold"})],
        );
        let recording = SheetComposer::default().dry_run(GameSystem::Dnd, &records).unwrap();
        assert_eq!(recording.page_count(), 3);
        assert_eq!(recording.texts(2)[0], "Kobold");
    }

    #[test]
    fn mixed_schemas_are_rejected_before_drawing() {
        let mut batch = records(GameSystem::Dnd, vec![json!({"name": "Gobelin"})]);
        batch.extend(records(GameSystem::Swn, vec![json!({"title": "Drone"})]));

        let err = SheetComposer::default().dry_run(GameSystem::Dnd, &batch).unwrap_err();
        assert!(matches!(
            err,
            SheetError::SchemaMismatch {
                system: GameSystem::Dnd,
                index: 1
            }
        ));
    }

    #[test]
    fn cof_records_serve_both_cof_systems() {
        let batch = records(GameSystem::CofMini, vec![json!({"name": "Spectre", "type": "Mort-vivant"})]);
        let composer = SheetComposer::default();
        let cof = composer.dry_run(GameSystem::CofMini, &batch).unwrap();
        let timothee = composer.dry_run(GameSystem::Timothee, &batch).unwrap();
        assert!(cof.contains_text("Type: Mort-vivant"));
        assert!(!timothee.contains_text("Type: Mort-vivant"));
    }

    #[test]
    fn empty_batch_gives_empty_document() {
        let recording = SheetComposer::default().dry_run(GameSystem::Swn, &[]).unwrap();
        assert_eq!(recording.page_count(), 0);
    }

    #[test]
    fn writes_pdf_file_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output").join(GameSystem::Swn.output_file_name());
        let batch = records(GameSystem::Swn, vec![json!({"title": "Drone – Sentinelle"})]);
        SheetComposer::default()
            .render_to_file(GameSystem::Swn, &batch, &path)
            .unwrap();
        let doc = lopdf::Document::load(&path).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
