use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::classification_field::ClassificationField;

pub trait FieldPresenterPort {
    fn present<W: Write>(&self, field: &ClassificationField, out: &mut W) -> std::io::Result<()>;

    fn present_to_file(
        &self,
        field: &ClassificationField,
        filepath: impl AsRef<Path>,
    ) -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(filepath)?);
        self.present(field, &mut out)?;
        out.flush()
    }
}
