//! Walk paths and path-annotated errors.

use std::fmt;

/// One step from a value to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Struct field, by serialization name.
    Field(&'static str),
    /// Position in an ordered sequence.
    Index(usize),
    /// Entry in a key-value map.
    Key(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(i) => write!(f, "[{}]", i),
            Self::Key(k) => write!(f, "[{}]", k),
        }
    }
}

/// Location of a value relative to the root of a walk.
///
/// Renders as `smtp.host`, `accounts[0].password` or `routes[alerts]`.
/// The root itself renders as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WalkPath {
    segments: Vec<Segment>,
}

impl WalkPath {
    /// Path of the walk root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from segments, outermost first.
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Segments, outermost first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True for the path of the walk root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Descend one level.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Return to the parent level.
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    /// Add a segment in front, re-rooting the path one level higher.
    pub fn prepend(&mut self, segment: Segment) {
        self.segments.insert(0, segment);
    }
}

impl fmt::Display for WalkPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 && matches!(segment, Segment::Field(_)) {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// An error tied to the location of the value that caused it.
#[derive(Debug)]
pub struct PathError<E> {
    path: WalkPath,
    source: E,
}

impl<E> PathError<E> {
    /// Attach a path to an error.
    pub fn new(path: WalkPath, source: E) -> Self {
        Self { path, source }
    }

    /// Where the error happened.
    pub fn path(&self) -> &WalkPath {
        &self.path
    }

    /// The error itself.
    pub fn error(&self) -> &E {
        &self.source
    }

    /// Unwrap into the underlying error.
    pub fn into_inner(self) -> E {
        self.source
    }

    /// Prefix the path with a segment from an enclosing walk.
    pub fn prepend(mut self, segment: Segment) -> Self {
        self.path.prepend(segment);
        self
    }
}

impl<E: fmt::Display> fmt::Display for PathError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "<root>: {}", self.source)
        } else {
            write!(f, "{}: {}", self.path, self.source)
        }
    }
}

impl<E> std::error::Error for PathError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
