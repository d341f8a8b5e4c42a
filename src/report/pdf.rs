use crate::report::document::{BoxItem, Page, TextItem};
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};

/// Low-level PDF writer: one page per `write_page`, shared Helvetica font.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,

    next_id: i32,
    font_id: Ref,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            next_id,
            font_id,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Append `page` with its boxes stroked first and texts on top.
    pub fn write_page(&mut self, page: &Page) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        {
            let mut p = self.pdf.page(page_id);
            p.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, page.width, page.height))
                .contents(content_id);
            p.resources().fonts().pair(Name(b"F1"), self.font_id);
        }

        let mut content = Content::new();
        for b in &page.boxes {
            draw_box(&mut content, b);
        }
        for t in &page.texts {
            if !t.text.is_empty() {
                draw_text(&mut content, t);
            }
        }

        self.pdf.stream(content_id, &content.finish());
    }

    /// Build catalog + page tree and return the file bytes.
    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        {
            let mut pages = self.pdf.pages(self.pages_id);
            pages.count(self.page_refs.len() as i32);
            pages.kids(self.page_refs.iter().copied());
        }

        self.pdf.finish()
    }
}

fn draw_text(content: &mut Content, t: &TextItem) {
    let bytes = to_win_ansi(&t.text);
    content.begin_text();
    content.set_font(Name(b"F1"), t.font_size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, t.x, t.y]);
    content.show(Str(&bytes));
    content.end_text();
}

fn draw_box(content: &mut Content, b: &BoxItem) {
    content.save_state();
    content.set_stroke_rgb(0.45, 0.45, 0.45);
    content.rect(b.x, b.y, b.width, b.height);
    content.stroke();
    content.restore_state();
}

/// Latin-1 characters map onto WinAnsi directly; anything else becomes '?'.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match u32::from(c) {
            cp @ 0x20..=0x7E | cp @ 0xA0..=0xFF => cp as u8,
            _ => b'?',
        })
        .collect()
}
