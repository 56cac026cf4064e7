use serde::de::DeserializeOwned;
use crate::error::DecodeError;

/// 백엔드 응답 텍스트를 기대하는 구조로 디코딩한다.
///
/// 백엔드는 JSON을 설명 문장이나 마크다운 펜스로 감싸서 보내는 일이 많으므로
/// 먼저 JSON 페이로드만 잘라낸 뒤 엄격하게 역직렬화한다. 필수 키 누락이나
/// 타입 불일치는 레코드 전체의 디코딩 실패다 - 기본값 대체는 하지 않는다.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, DecodeError> {
    let payload = extract_payload(raw).ok_or(DecodeError::MissingPayload)?;
    let value = serde_json::from_str(payload)?;
    Ok(value)
}

/// 응답에서 첫 번째 JSON 객체/배열 구간을 찾는다
fn extract_payload(raw: &str) -> Option<&str> {
    let region = fenced_block(raw).unwrap_or(raw);

    let start = region.find(['{', '['])?;
    let end = region.rfind(['}', ']'])?;

    if end < start {
        return None;
    }

    Some(&region[start..=end])
}

/// 마크다운 코드 펜스가 있으면 첫 펜스 내부만 돌려준다
fn fenced_block(raw: &str) -> Option<&str> {
    let open = raw.find("```")?;
    let after_tag = raw[open + 3..].find('\n')? + open + 4;
    let close = raw[after_tag..].find("```")? + after_tag;
    Some(&raw[after_tag..close])
}
