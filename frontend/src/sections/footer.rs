use yew::prelude::*;

use crate::components::CopyButton;
use crate::config::site_config;
use crate::content::{Anchor, SOCIALS};
use crate::icons::{Icon, IconView};

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = site_config();

    html! {
        <footer id={Anchor::Contact.id()} class="site-footer">
            <div class="container">
                <div class="footer-top">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <IconView icon={Icon::Sparkles} class={classes!("footer-logo-icon")} />
                            <span>{ config.brand }</span>
                        </div>
                        <p>
                            {"2024年底创立的宝藏Minecraft服务器。"}<br />
                            {"期待你的加入。"}
                        </p>
                    </div>

                    <div class="footer-social">
                        <h4>{"关注我们"}</h4>
                        <div class="social-links">
                            { for SOCIALS.iter().map(|social| html! {
                                <a
                                    href={social.url}
                                    target="_blank"
                                    rel="noreferrer"
                                    class="social-link"
                                    title={social.label}
                                    aria-label={social.name}
                                >
                                    <IconView icon={social.icon} />
                                </a>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="contact-card">
                    <div class="contact-copy">
                        <h3>{"加入玩家交流群"}</h3>
                        <p>{"获取最新公告、白名单申请及客户端下载"}</p>
                    </div>
                    <div class="contact-action">
                        <IconView icon={Icon::Message} class={classes!("contact-icon")} />
                        <div class="contact-group-id">{ config.group_id }</div>
                        <CopyButton text={config.group_id} label="复制" />
                    </div>
                </div>

                <div class="footer-copyright">{ config.copyright }</div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        background: #000;
                        padding: 4rem 0;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .footer-top {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #fff;
                    }
                    .footer-logo-icon {
                        color: #7c8cff;
                    }
                    .footer-brand p {
                        max-width: 20rem;
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .footer-social {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                        gap: 1rem;
                    }
                    .footer-social h4 {
                        color: #fff;
                        font-weight: 500;
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-link {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: #141728;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #9ca3af;
                        transition: all 0.2s;
                    }
                    .social-link .icon {
                        width: 1.25rem;
                        height: 1.25rem;
                    }
                    .social-link:hover {
                        background: #536dfe;
                        color: #fff;
                        transform: translateY(-4px);
                    }
                    .contact-card {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 2rem;
                        border-radius: 1rem;
                        background: rgba(11, 13, 23, 0.5);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                    }
                    .contact-copy h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: #fff;
                        margin-bottom: 0.25rem;
                    }
                    .contact-copy p {
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }
                    .contact-action {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .contact-icon {
                        width: 2rem;
                        height: 2rem;
                        color: #7c8cff;
                    }
                    .contact-group-id {
                        font-family: monospace;
                        font-size: 1.5rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        color: #fff;
                    }
                    .footer-copyright {
                        margin-top: 4rem;
                        text-align: center;
                        font-size: 0.75rem;
                        color: #4b5563;
                    }
                    @media (max-width: 768px) {
                        .footer-top, .contact-card {
                            flex-direction: column;
                            text-align: center;
                        }
                        .footer-social {
                            align-items: center;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
