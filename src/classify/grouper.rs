use crate::core::record::{AlignmentRecord, QueryGroup};

/// Splits a record stream into maximal runs of equal query name.
///
/// Only adjacent records are merged: a query name that reappears after
/// another query starts a new, independent group.
pub struct QueryGroups<I> {
    inner: I,
    pending: Option<AlignmentRecord>,
}

impl<I> QueryGroups<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            pending: None,
        }
    }

    /// The underlying record stream
    pub fn get_ref(&self) -> &I {
        &self.inner
    }
}

impl<I, E> Iterator for QueryGroups<I>
where
    I: Iterator<Item = Result<AlignmentRecord, E>>,
{
    type Item = Result<QueryGroup, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = match self.pending.take() {
            Some(record) => record,
            None => match self.inner.next()? {
                Ok(record) => record,
                Err(e) => return Some(Err(e)),
            },
        };
        let mut group = QueryGroup::new(first);

        loop {
            match self.inner.next() {
                None => return Some(Ok(group)),
                Some(Err(e)) => return Some(Err(e)),
                Some(Ok(record)) => {
                    if let Err(next_query) = group.try_push(record) {
                        self.pending = Some(next_query);
                        return Some(Ok(group));
                    }
                }
            }
        }
    }
}
