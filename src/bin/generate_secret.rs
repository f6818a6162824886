//! JWT 서명 키 생성기
//!
//! 256비트 난수를 base64로 인코딩해 출력합니다. 출력값을 `JWT_SECRET`에 그대로 사용할 수 있습니다.
//!
//! ```bash
//! cargo run --bin generate_secret
//! ```

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::rngs::OsRng;
use rand::RngCore;

const KEY_BYTES: usize = 32;

fn main() {
    let mut key = [0u8; KEY_BYTES];
    OsRng.fill_bytes(&mut key);

    println!("{}", STANDARD.encode(key));
}
