use serde::Serialize;

/// A record that lives in a [`Store`], identified by an opaque string id.
pub trait Record: Clone {
    fn id(&self) -> &str;
}

/// Ordered in-memory list of records owned by one screen.
///
/// Ids are handed out as `len + 1`, so deleting and then adding can produce
/// a duplicate id. Lookups always act on the first match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Store<T> {
    records: Vec<T>,
}

impl<T: Record> Store<T> {
    pub fn new(seed: Vec<T>) -> Self {
        Self { records: seed }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next appended record will get.
    pub fn next_id(&self) -> String {
        (self.records.len() + 1).to_string()
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn find_mut_by(&mut self, mut pred: impl FnMut(&T) -> bool) -> Option<&mut T> {
        self.records.iter_mut().find(|r| pred(r))
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Remove the first record with `id`. Returns false (and changes nothing)
    /// when there is none.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.records.iter().position(|r| r.id() == id) {
            Some(pos) => {
                self.records.remove(pos);
                true
            }
            None => false,
        }
    }
}
