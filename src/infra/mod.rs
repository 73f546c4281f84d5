// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
//   xml_writer.rs - renders DocumentRecords as a UTF-8 XML
//                   document with quick-xml and writes it to
//                   the output file, replacing whatever was
//                   there before.

/// XML serializer and output file writer
pub mod xml_writer;
