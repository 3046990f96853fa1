use std::{
    borrow::Cow,
    fmt,
    fs::File,
    io::{self, BufWriter, Cursor, Write},
    path::Path,
};

use tracing::{debug, instrument};

use crate::core::{Digraph, ErrorKind, ExportError, GraphError};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Writer of the [GEXF 1.2](https://gexf.net/) interchange format.
///
/// Vertices are written with their label and, if set, their weight. Edges
/// follow in the order of [`Digraph::edges`] with sequential ids starting at
/// zero, so that both storages produce identical documents for the same graph.
///
/// ```
/// use digraf::{core::Digraph, infra::export::Gexf, storage::AdjList};
///
/// let mut graph = AdjList::new(2);
/// graph.add_edge(0, 1).unwrap();
///
/// let gexf = Gexf::new().xml_declaration(false).to_string(&graph);
/// assert!(gexf.contains(r#"<edge id="0" source="0" target="1"/>"#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gexf {
    indent: usize,
    xml_declaration: bool,
    creator: Option<String>,
}

impl Default for Gexf {
    fn default() -> Self {
        Self {
            indent: 2,
            xml_declaration: true,
            creator: None,
        }
    }
}

impl Gexf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of spaces per nesting level.
    pub fn indent(self, indent: usize) -> Self {
        Self { indent, ..self }
    }

    pub fn xml_declaration(self, xml_declaration: bool) -> Self {
        Self {
            xml_declaration,
            ..self
        }
    }

    /// Adds a `<meta>` element naming the creator of the document.
    pub fn creator(self, creator: impl Into<String>) -> Self {
        Self {
            creator: Some(creator.into()),
            ..self
        }
    }

    pub fn to_string<G>(&self, graph: &G) -> String
    where
        G: Digraph,
    {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("gexf format is text format")
    }

    /// Writes the document to a file, creating or truncating it.
    #[instrument(skip(self, graph, path), fields(path = %path.as_ref().display()), level = "debug")]
    pub fn to_path<G, P>(&self, graph: &G, path: P) -> Result<(), ExportError>
    where
        G: Digraph,
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let file = File::create(path).map_err(|source| ExportError::io(path, source))?;
        let mut out = BufWriter::new(file);

        self.export(graph, &mut out)
            .and_then(|_| out.flush())
            .map_err(|source| ExportError::io(path, source))?;

        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "export written"
        );

        Ok(())
    }

    fn pad(&self, level: usize) -> Indent {
        Indent(self.indent * level)
    }
}

impl<G> Export<G> for Gexf
where
    G: Digraph,
{
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()> {
        debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "exporting gexf"
        );

        if self.xml_declaration {
            writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        }

        writeln!(
            out,
            r#"<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">"#
        )?;

        if let Some(creator) = &self.creator {
            writeln!(
                out,
                "{}<meta><creator>{}</creator></meta>",
                self.pad(1),
                escape(creator)
            )?;
        }

        writeln!(
            out,
            r#"{}<graph mode="static" defaultedgetype="directed">"#,
            self.pad(1)
        )?;

        writeln!(out, "{}<nodes>", self.pad(2))?;
        for vertex in 0..graph.vertex_count() {
            let label = graph.vertex_label(vertex).map_err(invalid_data)?;

            write!(
                out,
                r#"{}<node id="{vertex}" label="{}""#,
                self.pad(3),
                escape(&label)
            )?;

            if let Some(weight) = optional_weight(graph.vertex_weight(vertex))? {
                write!(out, r#" weight="{}""#, XsdFloat(weight))?;
            }

            writeln!(out, "/>")?;
        }
        writeln!(out, "{}</nodes>", self.pad(2))?;

        writeln!(out, "{}<edges>", self.pad(2))?;
        for (id, (src, dst)) in graph.edges().enumerate() {
            write!(
                out,
                r#"{}<edge id="{id}" source="{src}" target="{dst}""#,
                self.pad(3)
            )?;

            if let Some(weight) = optional_weight(graph.edge_weight(src, dst))? {
                write!(out, r#" weight="{}""#, XsdFloat(weight))?;
            }

            writeln!(out, "/>")?;
        }
        writeln!(out, "{}</edges>", self.pad(2))?;

        writeln!(out, "{}</graph>", self.pad(1))?;
        writeln!(out, "</gexf>")?;

        Ok(())
    }
}

struct Indent(usize);

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:1$}", "", self.0)
    }
}

/// Weight in the lexical form of `xsd:float`, which spells the special values
/// as `INF`, `-INF` and `NaN`.
struct XsdFloat(f64);

impl fmt::Display for XsdFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            w if w.is_nan() => f.write_str("NaN"),
            w if w == f64::INFINITY => f.write_str("INF"),
            w if w == f64::NEG_INFINITY => f.write_str("-INF"),
            w => write!(f, "{w}"),
        }
    }
}

fn optional_weight(weight: Result<f64, GraphError>) -> io::Result<Option<f64>> {
    match weight {
        Ok(weight) => Ok(Some(weight)),
        Err(error) if error.kind() == ErrorKind::WeightUnset => Ok(None),
        Err(error) => Err(invalid_data(error)),
    }
}

fn invalid_data(error: GraphError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, error)
}

fn escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use assert_matches::assert_matches;

    use crate::{
        core::Create,
        storage::{AdjList, AdjMatrix},
    };

    use super::*;

    fn weighted<G: Create>() -> G {
        let mut graph = G::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        graph.set_vertex_weight(0, 2.5).unwrap();
        graph.set_edge_weight(0, 1, 5.0).unwrap();
        graph
    }

    const WEIGHTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">
  <graph mode="static" defaultedgetype="directed">
    <nodes>
      <node id="0" label="0" weight="2.5"/>
      <node id="1" label="1"/>
      <node id="2" label="2"/>
    </nodes>
    <edges>
      <edge id="0" source="0" target="1" weight="5"/>
      <edge id="1" source="1" target="2"/>
    </edges>
  </graph>
</gexf>
"#;

    #[test]
    fn weighted_document() {
        assert_eq!(Gexf::new().to_string(&weighted::<AdjMatrix>()), WEIGHTED);
    }

    #[test]
    fn storages_export_identically() {
        let mut list = AdjList::new(5);
        let mut matrix = AdjMatrix::new(5);

        for (src, dst) in [(4, 0), (0, 3), (0, 1), (2, 4), (0, 2), (3, 1)] {
            list.add_edge(src, dst).unwrap();
            matrix.add_edge(src, dst).unwrap();
        }

        let gexf = Gexf::new();
        assert_eq!(gexf.to_string(&list), gexf.to_string(&matrix));
        assert_eq!(gexf.to_string(&weighted::<AdjList>()), WEIGHTED);
    }

    #[test]
    fn empty_graph() {
        let document = Gexf::new()
            .xml_declaration(false)
            .to_string(&AdjList::new(0));

        assert_eq!(
            document,
            r#"<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">
  <graph mode="static" defaultedgetype="directed">
    <nodes>
    </nodes>
    <edges>
    </edges>
  </graph>
</gexf>
"#
        );
    }

    #[test]
    fn edgeless_graph_lists_all_vertices() {
        fn check<G: Create>() {
            let document = Gexf::new().to_string(&G::with_vertex_count(5));

            assert_eq!(document.matches("<node ").count(), 5);
            assert_eq!(document.matches("<edge ").count(), 0);
        }

        check::<AdjList>();
        check::<AdjMatrix>();
    }

    #[test]
    fn non_finite_weights() {
        let mut graph = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        graph.set_vertex_weight(0, f64::INFINITY).unwrap();
        graph.set_vertex_weight(1, f64::NAN).unwrap();
        graph.set_edge_weight(0, 1, f64::NEG_INFINITY).unwrap();
        graph.set_edge_weight(1, 2, -0.5).unwrap();

        let document = Gexf::new().to_string(&graph);

        assert!(document.contains(r#"<node id="0" label="0" weight="INF"/>"#));
        assert!(document.contains(r#"<node id="1" label="1" weight="NaN"/>"#));
        assert!(document.contains(r#"<edge id="0" source="0" target="1" weight="-INF"/>"#));
        assert!(document.contains(r#"<edge id="1" source="1" target="2" weight="-0.5"/>"#));
        assert!(!document.contains("inf"));
    }

    #[test]
    fn options() {
        let mut graph = AdjMatrix::new(1);
        graph.set_vertex_label(0, "hub").unwrap();

        let document = Gexf::new()
            .indent(4)
            .xml_declaration(false)
            .creator("digraf")
            .to_string(&graph);

        assert_eq!(
            document,
            r#"<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">
    <meta><creator>digraf</creator></meta>
    <graph mode="static" defaultedgetype="directed">
        <nodes>
            <node id="0" label="hub"/>
        </nodes>
        <edges>
        </edges>
    </graph>
</gexf>
"#
        );
    }

    #[test]
    fn labels_are_escaped() {
        let mut graph = AdjList::new(1);
        graph.set_vertex_label(0, r#"<a & "b">"#).unwrap();

        let document = Gexf::new().to_string(&graph);
        assert!(document.contains(r#"label="&lt;a &amp; &quot;b&quot;&gt;""#));
    }

    #[test]
    fn escape_plain_is_borrowed() {
        assert_matches!(escape("plain label"), Cow::Borrowed("plain label"));
        assert_eq!(escape("it's"), "it&apos;s");
    }

    #[test]
    fn export_does_not_mutate() {
        let graph = weighted::<AdjList>();
        let before = graph.clone();

        Gexf::new().to_string(&graph);
        assert_eq!(graph, before);
    }

    #[test]
    fn to_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.gexf");

        Gexf::new()
            .to_path(&weighted::<AdjList>(), &path)
            .unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), WEIGHTED);
    }

    #[test]
    fn to_path_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("graph.gexf");

        let result = Gexf::new().to_path(&AdjMatrix::new(2), &path);
        assert_matches!(result, Err(ExportError::Io { path: p, .. }) if p == path);
    }
}
