pub type FrameId = usize;
pub type PageId = u32;

/// Bookkeeping for one physical page slot. No page contents are simulated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    // Page held by this frame, None until the first install
    pub resident: Option<PageId>,
    pub dirty: bool,
    // Second chance bit, only read by the clock policy
    pub referenced: bool,
    // Reference sequence number of the last access, only read by lru
    pub last_use: u64,
}

impl Frame {
    pub fn is_occupied(&self) -> bool {
        self.resident.is_some()
    }

    pub fn holds(&self, page: PageId) -> bool {
        self.resident == Some(page)
    }
}

pub struct FrameTable {
    frames: Vec<Frame>,
}

impl FrameTable {
    pub fn new(capacity: usize) -> Self {
        FrameTable {
            frames: vec![Frame::default(); capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, frame_id: FrameId) -> Option<&Frame> {
        self.frames.get(frame_id)
    }

    pub fn get_mut(&mut self, frame_id: FrameId) -> Option<&mut Frame> {
        self.frames.get_mut(frame_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    pub fn occupied(&self) -> usize {
        self.frames.iter().filter(|f| f.is_occupied()).count()
    }

    /// Appends `additional` empty frames.
    pub fn grow(&mut self, additional: usize) {
        self.frames
            .resize(self.frames.len() + additional, Frame::default());
    }

    /// Puts `page` into the frame, clearing dirty and reference state.
    /// Must be paired with a `PageIndex::install` for the same page.
    pub fn install(&mut self, frame_id: FrameId, page: PageId, sequence: u64) {
        let frame = &mut self.frames[frame_id];
        frame.resident = Some(page);
        frame.dirty = false;
        frame.referenced = false;
        frame.last_use = sequence;
    }

    pub fn touch(&mut self, frame_id: FrameId, sequence: u64, is_write: bool) {
        let frame = &mut self.frames[frame_id];
        frame.last_use = sequence;
        frame.referenced = true;
        if is_write {
            frame.dirty = true;
        }
    }
}
