use crate::engine::types::DocumentationResult;

/// 문서 생성 응답을 주석이 달린 하나의 텍스트 블록으로 렌더링한다.
/// 빈 섹션은 헤더까지 통째로 생략하며, 섹션 사이는 빈 줄 하나로 구분한다.
pub fn format_documentation(raw: &DocumentationResult) -> String {
    let mut sections = Vec::new();

    sections.push(format!("/// {}", raw.overview));
    sections.push(raw.documented_code.clone());

    if !raw.examples.is_empty() {
        let mut block = String::from("/// Examples:");
        for example in &raw.examples {
            for line in example.lines() {
                block.push_str("\n/// ");
                block.push_str(line);
            }
        }
        sections.push(block);
    }

    if !raw.notes.is_empty() {
        let mut block = String::from("/// Notes:");
        for note in &raw.notes {
            block.push_str("\n/// - ");
            block.push_str(note);
        }
        sections.push(block);
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn documentation(examples: Vec<&str>, notes: Vec<&str>) -> DocumentationResult {
        DocumentationResult {
            overview: "비동기 큐 구현".to_string(),
            documented_code: "fn push() {}".to_string(),
            examples: examples.into_iter().map(String::from).collect(),
            notes: notes.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn empty_sections_are_omitted_entirely() {
        let output = format_documentation(&documentation(vec![], vec![]));
        assert_eq!(output, "/// 비동기 큐 구현\n\nfn push() {}");
        assert!(!output.contains("Examples"));
        assert!(!output.contains("Notes"));
    }

    #[test]
    fn examples_and_notes_render_as_doc_comment_blocks() {
        let output = format_documentation(&documentation(
            vec!["queue.push(1)"],
            vec!["스레드 안전하지 않음", "용량 제한 없음"],
        ));

        assert!(output.contains("\n\n/// Examples:\n/// queue.push(1)"));
        assert!(output.contains("\n\n/// Notes:\n/// - 스레드 안전하지 않음\n/// - 용량 제한 없음"));
    }

    #[test]
    fn multiline_examples_keep_doc_comment_prefix() {
        let output = format_documentation(&documentation(vec!["let q = Queue::new();\nq.push(1);"], vec![]));
        assert!(output.contains("/// let q = Queue::new();\n/// q.push(1);"));
    }
}
