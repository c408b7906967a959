use crate::ids::FormatId;

/// 从系统剪切板中获取到原始数据的快照
///
/// One instant of the system clipboard: every format it advertises, in the
/// clipboard service's native priority order. Never cached across invocations.
#[derive(Debug, Clone)]
pub struct SystemClipboardSnapshot {
    pub representations: Vec<ObservedClipboardRepresentation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedClipboardRepresentation {
    pub format_id: FormatId,
    /// `None` when the format is advertised but its payload could not be read.
    pub bytes: Option<Vec<u8>>,
}

impl ObservedClipboardRepresentation {
    pub fn new(format_id: FormatId, bytes: Option<Vec<u8>>) -> Self {
        Self { format_id, bytes }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.as_ref().map_or(0, Vec::len)
    }
}

impl SystemClipboardSnapshot {
    pub fn new(representations: Vec<ObservedClipboardRepresentation>) -> Self {
        Self { representations }
    }

    /// 返回该快照中所有 representation 的总字节大小
    pub fn total_size_bytes(&self) -> usize {
        self.representations.iter().map(|r| r.size_bytes()).sum()
    }

    /// 是否为空快照（没有任何 representation）
    pub fn is_empty(&self) -> bool {
        self.representations.is_empty()
    }

    pub fn representation_count(&self) -> usize {
        self.representations.len()
    }
}
