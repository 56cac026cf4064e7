use clap::{Parser, Subcommand};
use clap_complete::Shell;
use crate::handlers::config::ConfigAction;

#[derive(Parser)]
#[clap(name = "prism")]
#[clap(about = "AI 기반 코드 품질 분석 CLI", version)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 코드 품질 분석
    Analyze {
        /// 분석할 소스 파일
        path: String,

        /// 소스 언어 (생략 시 확장자로 추정)
        #[clap(short, long)]
        language: Option<String>,

        /// 출력 형식 (terminal, markdown, json, yaml)
        #[clap(short, long, default_value = "terminal")]
        format: String,
    },

    /// 발견된 이슈에 대한 개선안 생성
    Improve {
        /// 대상 소스 파일
        path: String,

        /// 소스 언어 (생략 시 확장자로 추정)
        #[clap(short, long)]
        language: Option<String>,
    },

    /// 문서 생성
    Doc {
        /// 문서화할 파일 또는 인라인 코드
        target: String,
    },

    /// 설정 관리
    Config {
        #[clap(subcommand)]
        action: ConfigAction,
    },

    /// 쉘 완성 스크립트 생성
    Completion {
        /// 대상 쉘
        #[clap(value_enum)]
        shell: Shell,
    },
}
