use battlesheet_render_core::RenderError;
use lopdf::content::Content;
use lopdf::xref::{Xref, XrefEntry, XrefType};
use lopdf::{Dictionary, Object, ObjectId, Stream, dictionary};
use std::collections::BTreeMap;
use std::io::{self, Seek, Write};

/// Writes a PDF body, cross-reference table and trailer to a seekable sink.
///
/// Objects are buffered under pre-assigned ids and written in id order on
/// `finish`; the resources, page tree and catalog ids are reserved up front
/// so page dictionaries can reference them before they exist.
pub struct StreamingPdfWriter<W: Write + Seek> {
    writer: W,
    /// Bytes written so far, used as xref offsets.
    offset: u64,
    xref: Xref,
    max_id: u32,
    catalog_id: ObjectId,
    pub pages_id: ObjectId,
    pub resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    buffered_objects: BTreeMap<ObjectId, Object>,
}

impl<W: Write + Seek> StreamingPdfWriter<W> {
    pub fn new(writer: W, version: &str, font_dict: Dictionary) -> io::Result<Self> {
        let resources_id = (1, 0);
        let pages_id = (2, 0);
        let catalog_id = (3, 0);

        let mut buffered_objects = BTreeMap::new();
        buffered_objects.insert(resources_id, dictionary! { "Font" => font_dict }.into());

        let mut this = Self {
            writer,
            offset: 0,
            xref: Xref::new(0, XrefType::CrossReferenceTable),
            max_id: 3,
            catalog_id,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            buffered_objects,
        };
        this.emit(format!("%PDF-{}\n%âãÏÓ\n", version).as_bytes())?;
        Ok(this)
    }

    fn emit(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)?;
        self.offset += bytes.len() as u64;
        Ok(())
    }

    pub fn buffer_object(&mut self, object: Object) -> ObjectId {
        self.max_id += 1;
        let id = (self.max_id, 0);
        self.buffered_objects.insert(id, object);
        id
    }

    pub fn buffer_content_stream(&mut self, content: Content) -> Result<ObjectId, RenderError> {
        let stream = Stream::new(dictionary! {}, content.encode()?);
        Ok(self.buffer_object(Object::Stream(stream)))
    }

    pub fn set_page_ids(&mut self, page_ids: Vec<ObjectId>) {
        self.page_ids = page_ids;
    }

    pub fn finish(mut self) -> io::Result<W> {
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => self.page_ids.iter().map(|id| Object::Reference(*id)).collect::<Vec<Object>>(),
            "Count" => self.page_ids.len() as i64,
        };
        self.buffered_objects.insert(self.pages_id, pages_dict.into());
        let catalog_dict = dictionary! { "Type" => "Catalog", "Pages" => self.pages_id };
        self.buffered_objects.insert(self.catalog_id, catalog_dict.into());

        let objects = std::mem::take(&mut self.buffered_objects);
        for (id, object) in &objects {
            self.xref.insert(id.0, XrefEntry::Normal { offset: self.offset as u32, generation: id.1 });
            let mut out = Vec::new();
            syntax::indirect_object(&mut out, *id, object)?;
            self.emit(&out)?;
        }

        let xref_start = self.offset;
        self.xref.size = self.max_id + 1;
        let trailer = dictionary! { "Size" => self.xref.size as i64, "Root" => self.catalog_id };

        let mut out = Vec::new();
        syntax::xref_table(&mut out, &self.xref)?;
        out.extend_from_slice(b"trailer\n");
        syntax::dictionary(&mut out, &trailer)?;
        write!(out, "\nstartxref\n{}\n%%EOF", xref_start)?;
        self.emit(&out)?;

        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Serialization of the object kinds a card document contains: names,
/// numbers, references, arrays, dictionaries and top-level content streams.
mod syntax {
    use super::*;

    fn unsupported(what: &str) -> io::Error {
        io::Error::new(io::ErrorKind::InvalidInput, format!("cannot serialize {} object", what))
    }

    /// Three decimals with trailing zeros dropped: `12.500` → `12.5`, `3.000` → `3`.
    fn real(out: &mut Vec<u8>, value: f32) -> io::Result<()> {
        let text = format!("{:.3}", value);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        out.extend_from_slice(if text == "-0" { b"0" } else { text.as_bytes() });
        Ok(())
    }

    pub fn object(out: &mut Vec<u8>, object: &Object) -> io::Result<()> {
        match object {
            Object::Integer(i) => write!(out, "{}", i),
            Object::Real(r) => real(out, *r),
            Object::Name(name) => {
                out.push(b'/');
                out.extend_from_slice(name);
                Ok(())
            }
            Object::Reference((number, generation)) => write!(out, "{} {} R", number, generation),
            Object::Array(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(b' ');
                    }
                    self::object(out, item)?;
                }
                out.push(b']');
                Ok(())
            }
            Object::Dictionary(dict) => dictionary(out, dict),
            Object::Stream(_) => Err(unsupported("nested stream")),
            other => Err(unsupported(other.enum_variant())),
        }
    }

    pub fn dictionary(out: &mut Vec<u8>, dict: &Dictionary) -> io::Result<()> {
        out.extend_from_slice(b"<<");
        let sorted: BTreeMap<_, _> = dict.iter().collect();
        for (key, value) in sorted {
            out.extend_from_slice(b" /");
            out.extend_from_slice(key);
            out.push(b' ');
            object(out, value)?;
        }
        out.extend_from_slice(b" >>");
        Ok(())
    }

    pub fn indirect_object(out: &mut Vec<u8>, id: ObjectId, object: &Object) -> io::Result<()> {
        writeln!(out, "{} {} obj", id.0, id.1)?;
        match object {
            Object::Stream(stream) => {
                let mut dict = stream.dict.clone();
                dict.set("Length", stream.content.len() as i64);
                dictionary(out, &dict)?;
                out.extend_from_slice(b"\nstream\n");
                out.extend_from_slice(&stream.content);
                out.extend_from_slice(b"\nendstream");
            }
            other => self::object(out, other)?,
        }
        out.extend_from_slice(b"\nendobj\n");
        Ok(())
    }

    /// Object ids are allocated densely from 1, so the table is a single
    /// subsection headed by the free entry for object 0.
    pub fn xref_table(out: &mut Vec<u8>, xref: &Xref) -> io::Result<()> {
        write!(out, "xref\n0 {}\n0000000000 65535 f \n", xref.size)?;
        for id in 1..xref.size {
            match xref.entries.get(&id) {
                Some(XrefEntry::Normal { offset, generation }) => {
                    writeln!(out, "{:010} {:05} n ", offset, generation)?;
                }
                _ => out.extend_from_slice(b"0000000000 65535 f \n"),
            }
        }
        Ok(())
    }
}
